//! Deployment Driver
//!
//! For each device, in discovery order: uninstall the package, install the
//! APK, then launch the activity when one is configured. Steps are
//! best-effort. A failing step is reported and the driver moves on; nothing
//! is retried or rolled back.

use std::ffi::OsString;

use crate::bridge::{install_args, launch_args, uninstall_args, Bridge};
use crate::events::{DeployEvent, DeployEventSink};
use crate::models::{DeployStep, DeploySummary, DeviceId, DeviceReport, RunConfig, StepOutcome};

/// A bridge invocation the driver will make for one device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedStep {
    pub step: DeployStep,
    pub subject: String,
    pub args: Vec<OsString>,
}

/// Steps for one device, in the order they run.
pub fn plan_device(config: &RunConfig, device: &DeviceId) -> Vec<PlannedStep> {
    let mut steps = vec![
        PlannedStep {
            step: DeployStep::Uninstall,
            subject: config.package_id.clone(),
            args: uninstall_args(device, &config.package_id),
        },
        PlannedStep {
            step: DeployStep::Install,
            subject: config.apk_file_name(),
            args: install_args(device, &config.apk_file),
        },
    ];

    if let (Some(activity), Some(component)) =
        (&config.launch_activity, config.launch_component())
    {
        steps.push(PlannedStep {
            step: DeployStep::Launch,
            subject: activity.clone(),
            args: launch_args(device, &component),
        });
    }

    steps
}

/// Deploy to every device, one at a time.
pub fn deploy_all(
    config: &RunConfig,
    devices: &[DeviceId],
    bridge: &dyn Bridge,
    sink: &dyn DeployEventSink,
) -> DeploySummary {
    let devices = devices
        .iter()
        .map(|device| deploy_device(config, device, bridge, sink))
        .collect();
    DeploySummary { devices }
}

/// Run every planned step against a single device.
pub fn deploy_device(
    config: &RunConfig,
    device: &DeviceId,
    bridge: &dyn Bridge,
    sink: &dyn DeployEventSink,
) -> DeviceReport {
    let mut report = DeviceReport::new(device.clone());

    for planned in plan_device(config, device) {
        sink.on_event(DeployEvent::StepStarted {
            device: device.clone(),
            step: planned.step,
            subject: planned.subject,
        });

        let (outcome, output) = match bridge.run(&planned.args) {
            Ok(out) if out.success => (StepOutcome::Succeeded, out.stdout),
            Ok(out) => (StepOutcome::Failed { code: out.code }, out.stdout),
            Err(err) => (
                StepOutcome::SpawnFailed {
                    message: err.to_string(),
                },
                String::new(),
            ),
        };

        sink.on_event(DeployEvent::StepFinished {
            device: device.clone(),
            step: planned.step,
            outcome: outcome.clone(),
            output,
        });
        report.steps.push((planned.step, outcome));
    }

    report
}
