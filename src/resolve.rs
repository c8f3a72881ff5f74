//! Configuration Resolver
//!
//! Merges command-line values with the loaded [`Config`] and validates the
//! result. Checks run in a fixed order: bridge first, then the APK path.
//!
//! The bridge is chosen one layer at a time: command-line `--adb` or
//! `--sdk-path` beat any `adb` or `sdk_path` from the environment or a
//! config file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::bridge::{self, DEFAULT_BRIDGE};
use crate::config::Config;
use crate::error::{DeployError, DeployResult};
use crate::models::{RunConfig, DEFAULT_APP_PACKAGE};

/// Values taken from the command line. `None` defers to config and defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveRequest {
    pub apk_file: Option<PathBuf>,
    pub app_package: Option<String>,
    pub sdk_path: Option<PathBuf>,
    pub launch_activity: Option<String>,
    pub adb: Option<PathBuf>,
}

/// Resolve and validate a run configuration against the real system.
pub fn resolve(request: &ResolveRequest, config: &Config) -> DeployResult<RunConfig> {
    resolve_with(request, config, |program| bridge::locate(program).is_some())
}

/// Resolve with a custom "is this executable usable" probe.
pub fn resolve_with(
    request: &ResolveRequest,
    config: &Config,
    bridge_available: impl Fn(&Path) -> bool,
) -> DeployResult<RunConfig> {
    let android = &config.android;

    let sdk_path = pick(request.sdk_path.clone(), android.sdk_path.clone());
    let bridge = bridge_path(request.adb.as_deref(), request.sdk_path.as_deref())
        .or_else(|| bridge_path(android.adb.as_deref(), android.sdk_path.as_deref()))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BRIDGE));

    if !bridge_available(&bridge) {
        return Err(DeployError::BridgeNotFound { bridge });
    }

    let apk_file = request
        .apk_file
        .clone()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(DeployError::MissingApkFile)?;

    // Follows symlinks, like the existence check users expect from a shell.
    let is_file = fs::metadata(&apk_file)
        .map(|meta| !meta.is_dir())
        .unwrap_or(false);
    if !is_file {
        return Err(DeployError::ApkNotFound { path: apk_file });
    }

    let package_id = pick(request.app_package.clone(), android.app_package.clone())
        .unwrap_or_else(|| DEFAULT_APP_PACKAGE.to_string());
    let launch_activity = pick(
        request.launch_activity.clone(),
        android.launch_activity.clone(),
    );

    Ok(RunConfig {
        bridge,
        sdk_path,
        package_id,
        apk_file,
        launch_activity,
    })
}

/// Bridge executable named by a single layer: its explicit `adb`, else its
/// SDK `platform-tools/adb`. Empty values count as unset.
pub fn bridge_path(adb: Option<&Path>, sdk_path: Option<&Path>) -> Option<PathBuf> {
    fn set(p: Option<&Path>) -> Option<&Path> {
        p.filter(|p| !p.as_os_str().is_empty())
    }
    match (set(adb), set(sdk_path)) {
        (Some(adb), _) => Some(adb.to_path_buf()),
        (None, Some(sdk)) => Some(bridge::sdk_bridge_path(sdk)),
        (None, None) => None,
    }
}

/// First non-empty value, CLI before config.
fn pick<T: AsRef<std::ffi::OsStr>>(cli: Option<T>, config: Option<T>) -> Option<T> {
    cli.into_iter()
        .chain(config)
        .find(|v| !AsRef::<std::ffi::OsStr>::as_ref(v).is_empty())
}
