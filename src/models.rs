//! Core data models for apk-deploy

use std::fmt;
use std::path::{Path, PathBuf};

/// Package deployed when none is configured.
pub const DEFAULT_APP_PACKAGE: &str = "com.cisco.sv";

/// Intent action passed to `am start` when launching an activity.
pub const LAUNCH_INTENT_ACTION: &str = "android.intent.action.MAIN";

/// Fully resolved run configuration.
///
/// Built once by [`crate::resolve::resolve`] and passed by reference to
/// discovery and deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Bridge executable as configured (bare `adb` or a path)
    pub bridge: PathBuf,
    /// Android SDK root, when one was given
    pub sdk_path: Option<PathBuf>,
    /// Package identifier to uninstall and launch
    pub package_id: String,
    /// APK file to install
    pub apk_file: PathBuf,
    /// Activity started after install, relative to the package
    pub launch_activity: Option<String>,
}

impl RunConfig {
    /// File name of the APK, used in progress messages.
    pub fn apk_file_name(&self) -> String {
        file_name_lossy(&self.apk_file)
    }

    /// `<package>/<activity>` component name, when an activity is configured.
    pub fn launch_component(&self) -> Option<String> {
        self.launch_activity
            .as_ref()
            .map(|activity| format!("{}/{}", self.package_id, activity))
    }
}

fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Device identifier as reported by `adb devices`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One per-device deployment step, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployStep {
    Uninstall,
    Install,
    Launch,
}

impl DeployStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeployStep::Uninstall => "uninstall",
            DeployStep::Install => "install",
            DeployStep::Launch => "launch",
        }
    }
}

/// Observed result of a single bridge invocation.
///
/// Recorded for reporting only; a failed step never stops deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Bridge exited with status 0
    Succeeded,
    /// Bridge exited non-zero (or was killed by a signal when `code` is `None`)
    Failed { code: Option<i32> },
    /// Bridge could not be started
    SpawnFailed { message: String },
}

impl StepOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, StepOutcome::Succeeded)
    }
}

/// Steps executed against one device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceReport {
    pub device: DeviceId,
    pub steps: Vec<(DeployStep, StepOutcome)>,
}

impl DeviceReport {
    pub fn new(device: DeviceId) -> Self {
        Self {
            device,
            steps: Vec::new(),
        }
    }

    pub fn failed_steps(&self) -> usize {
        self.steps
            .iter()
            .filter(|(_, outcome)| !outcome.is_success())
            .count()
    }
}

/// Result of deploying to every discovered device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploySummary {
    pub devices: Vec<DeviceReport>,
}

impl DeploySummary {
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    pub fn failed_steps(&self) -> usize {
        self.devices.iter().map(DeviceReport::failed_steps).sum()
    }
}
