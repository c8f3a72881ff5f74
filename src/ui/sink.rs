//! Event sinks that turn deploy events into terminal output.

use apk_deploy::{DeployEvent, DeployEventSink, DeployStep, StepOutcome};

use crate::ui::context::UiContext;
use crate::ui::json;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Human-readable progress on stdout.
pub struct ConsoleEventSink {
    ui: UiContext,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.ui.color, self.ui.unicode)
    }

    /// Text for one event, or `None` when the event prints nothing.
    pub fn render(&self, event: &DeployEvent) -> Option<String> {
        let color = self.ui.color;
        match event {
            DeployEvent::ConfigResolved { config } => {
                let sdk = config
                    .sdk_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(none)".to_string());
                let title = ColoredText::info("apk-deploy").bold().render(color);
                let mut out = format!("\n{} {}\n", self.icon(Icon::Deploy), title);
                out.push_str(&format!(
                    "Using 'adb' executable: {}\n",
                    config.bridge.display()
                ));
                out.push_str(&format!("Using Android SDK path: {}\n", sdk));
                out.push_str(&format!(
                    "Using Android APK file: {}\n",
                    config.apk_file.display()
                ));
                out.push_str(&format!("Using Android app package: {}\n", config.package_id));
                if let Some(activity) = &config.launch_activity {
                    out.push_str(&format!("Using launch activity: {}\n", activity));
                }
                Some(out)
            }
            DeployEvent::DiscoveryStarted { .. } => {
                Some("Getting list of connected Android devices".to_string())
            }
            DeployEvent::DeviceDetected { device } => Some(format!(
                "{} Detected Android device: {}",
                self.icon(Icon::Device),
                device
            )),
            DeployEvent::NoDevices => Some(format!(
                "\n{}\n",
                ColoredText::warning("No Android devices connected").render(color)
            )),
            DeployEvent::StepStarted {
                device,
                step,
                subject,
            } => {
                let message = match step {
                    DeployStep::Uninstall => {
                        format!("Uninstalling '{}' app from device '{}'", subject, device)
                    }
                    DeployStep::Install => {
                        format!("Installing '{}' app to device '{}'", subject, device)
                    }
                    DeployStep::Launch => format!(
                        "Launching Android activity '{}' on device '{}'",
                        subject, device
                    ),
                };
                Some(format!("\n{} {}", self.icon(Icon::Progress), message))
            }
            DeployEvent::StepFinished {
                step,
                outcome,
                output,
                ..
            } => self.render_step_detail(*step, outcome, output),
            DeployEvent::Completed {
                device_count,
                failed_steps,
            } => {
                let mut line = format!(
                    "\n{} {}",
                    self.icon(Icon::Success),
                    ColoredText::success(format!("Deployed to {} device(s)", device_count))
                        .render(color)
                );
                if *failed_steps > 0 {
                    let note = format!(
                        " ({} step(s) reported failure; run with -v for details)",
                        failed_steps
                    );
                    line.push_str(&ColoredText::dim(note).render(color));
                }
                line.push('\n');
                Some(line)
            }
        }
    }

    /// Captured adb output and exit status, shown only with `-v`.
    fn render_step_detail(
        &self,
        step: DeployStep,
        outcome: &StepOutcome,
        output: &str,
    ) -> Option<String> {
        if self.ui.verbose == 0 {
            return None;
        }

        let mut lines: Vec<String> = output
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                format!(
                    "  {} {}",
                    self.icon(Icon::Arrow),
                    ColoredText::dim(l.trim_end()).render(self.ui.color)
                )
            })
            .collect();

        let status = match outcome {
            StepOutcome::Succeeded => None,
            StepOutcome::Failed { code: Some(code) } => {
                Some(format!("{} exited with status {}", step.as_str(), code))
            }
            StepOutcome::Failed { code: None } => {
                Some(format!("{} was terminated by a signal", step.as_str()))
            }
            StepOutcome::SpawnFailed { message } => Some(message.clone()),
        };
        if let Some(status) = status {
            lines.push(format!(
                "  {} {}",
                self.icon(Icon::Warning),
                ColoredText::warning(status).render(self.ui.color)
            ));
        }

        (!lines.is_empty()).then(|| lines.join("\n"))
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        if let Some(text) = self.render(&event) {
            println!("{}", text);
        }
    }
}

/// NDJSON event stream on stdout.
pub struct JsonEventSink {
    verbose: u8,
}

impl JsonEventSink {
    pub fn new(verbose: u8) -> Self {
        Self { verbose }
    }

    pub fn to_json(&self, event: &DeployEvent) -> serde_json::Value {
        use serde_json::json;

        match event {
            DeployEvent::ConfigResolved { config } => json!({
                "event": "config",
                "adb": config.bridge.display().to_string(),
                "sdk_path": config.sdk_path.as_ref().map(|p| p.display().to_string()),
                "apk_file": config.apk_file.display().to_string(),
                "app_package": config.package_id,
                "launch_activity": config.launch_activity,
            }),
            DeployEvent::DiscoveryStarted { bridge } => json!({
                "event": "discovery_start",
                "adb": bridge.display().to_string(),
            }),
            DeployEvent::DeviceDetected { device } => json!({
                "event": "device",
                "id": device.as_str(),
            }),
            DeployEvent::NoDevices => json!({ "event": "no_devices" }),
            DeployEvent::StepStarted {
                device,
                step,
                subject,
            } => json!({
                "event": "step_start",
                "device": device.as_str(),
                "step": step.as_str(),
                "subject": subject,
            }),
            DeployEvent::StepFinished {
                device,
                step,
                outcome,
                output,
            } => {
                let mut value = json!({
                    "event": "step_finish",
                    "device": device.as_str(),
                    "step": step.as_str(),
                    "success": outcome.is_success(),
                });
                match outcome {
                    StepOutcome::Succeeded => value["exit_code"] = json!(0),
                    StepOutcome::Failed { code } => value["exit_code"] = json!(code),
                    StepOutcome::SpawnFailed { message } => value["error"] = json!(message),
                }
                if self.verbose > 0 {
                    value["output"] = json!(output);
                }
                value
            }
            DeployEvent::Completed {
                device_count,
                failed_steps,
            } => json!({
                "event": "complete",
                "devices": device_count,
                "failed_steps": failed_steps,
            }),
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let _ = json::emit(self.to_json(&event));
    }
}
