//! Device Bridge
//!
//! The `adb` executable is driven as an opaque subprocess. Every invocation
//! goes through the [`Bridge`] trait so discovery and deployment can be
//! exercised against a fake in tests.
//!
//! Arguments are always passed as a vector; nothing is interpolated into a
//! shell command line.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{DeployError, DeployResult};
use crate::models::{DeviceId, LAUNCH_INTENT_ACTION};

/// Bridge executable name used when no SDK path or override is given.
pub const DEFAULT_BRIDGE: &str = "adb";

/// Captured result of one bridge invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stdout: String,
}

/// Abstract device bridge
pub trait Bridge {
    /// Executable this bridge runs (for messages)
    fn program(&self) -> &Path;

    /// Run the bridge with `args`, blocking until it exits.
    ///
    /// Stdout is captured; stderr goes straight to the user's terminal.
    /// A non-zero exit is reported through [`BridgeOutput::success`], not as
    /// an error.
    fn run(&self, args: &[OsString]) -> DeployResult<BridgeOutput>;
}

/// Bridge backed by a real `adb` process.
#[derive(Debug, Clone)]
pub struct AdbBridge {
    program: PathBuf,
}

impl AdbBridge {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Bridge for AdbBridge {
    fn program(&self) -> &Path {
        &self.program
    }

    fn run(&self, args: &[OsString]) -> DeployResult<BridgeOutput> {
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| DeployError::BridgeSpawn {
                bridge: self.program.clone(),
                source,
            })?;

        Ok(BridgeOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

/// Resolve the bridge executable.
///
/// Bare names are searched on `PATH`; anything with a directory component is
/// checked in place. Returns `None` when the executable cannot be run.
pub fn locate(program: &Path) -> Option<PathBuf> {
    which::which(program).ok()
}

/// Bridge path for an SDK root: `<sdk>/platform-tools/adb`.
pub fn sdk_bridge_path(sdk_path: &Path) -> PathBuf {
    sdk_path.join("platform-tools").join(DEFAULT_BRIDGE)
}

/// `adb devices`
pub fn devices_args() -> Vec<OsString> {
    vec!["devices".into()]
}

/// `adb -s <id> uninstall <package>`
pub fn uninstall_args(device: &DeviceId, package_id: &str) -> Vec<OsString> {
    vec![
        "-s".into(),
        device.as_str().into(),
        "uninstall".into(),
        package_id.into(),
    ]
}

/// `adb -s <id> install <apk>`
pub fn install_args(device: &DeviceId, apk_file: &Path) -> Vec<OsString> {
    vec![
        "-s".into(),
        device.as_str().into(),
        "install".into(),
        apk_file.as_os_str().to_os_string(),
    ]
}

/// `adb -s <id> shell am start -a android.intent.action.MAIN -n <component>`
pub fn launch_args(device: &DeviceId, component: &str) -> Vec<OsString> {
    vec![
        "-s".into(),
        device.as_str().into(),
        "shell".into(),
        "am".into(),
        "start".into(),
        "-a".into(),
        LAUNCH_INTENT_ACTION.into(),
        "-n".into(),
        component.into(),
    ]
}

/// Recording bridge for testing
///
/// Logs every invocation and answers `devices` with a canned listing.
/// Uses `Arc<Mutex<>>` internally so clones share one call log.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct RecordingBridge {
    pub calls: std::sync::Arc<std::sync::Mutex<Vec<Vec<String>>>>,
    pub devices_output: String,
    /// Subcommands (`uninstall`, `install`, `shell`) that exit with status 1
    pub failing: Vec<&'static str>,
    /// Every invocation fails to spawn
    pub unspawnable: bool,
}

#[cfg(test)]
impl RecordingBridge {
    pub fn with_devices(output: &str) -> Self {
        Self {
            devices_output: output.to_string(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Bridge for RecordingBridge {
    fn program(&self) -> &Path {
        Path::new(DEFAULT_BRIDGE)
    }

    fn run(&self, args: &[OsString]) -> DeployResult<BridgeOutput> {
        let args: Vec<String> = args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        self.calls.lock().unwrap().push(args.clone());

        if self.unspawnable {
            return Err(DeployError::BridgeSpawn {
                bridge: PathBuf::from(DEFAULT_BRIDGE),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            });
        }

        if args.first().map(String::as_str) == Some("devices") {
            return Ok(BridgeOutput {
                success: true,
                code: Some(0),
                stdout: self.devices_output.clone(),
            });
        }

        let failed = args
            .get(2)
            .is_some_and(|sub| self.failing.contains(&sub.as_str()));
        Ok(BridgeOutput {
            success: !failed,
            code: Some(if failed { 1 } else { 0 }),
            stdout: if failed {
                "Failure [DELETE_FAILED_INTERNAL_ERROR]\n".to_string()
            } else {
                "Success\n".to_string()
            },
        })
    }
}
