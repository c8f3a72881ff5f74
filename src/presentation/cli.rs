//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - `--help` exits with status 1; the binary maps clap's exit codes itself
//! - Flags left unset fall back to env vars, then the config file

use std::path::PathBuf;

use clap::Parser;

use crate::resolve::ResolveRequest;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Deploy an Android app to every connected device
#[derive(Parser, Debug)]
#[command(name = "apk-deploy")]
#[command(version, about, long_about = None)]
#[command(override_usage = "apk-deploy --apk-file [APP-APK-FILE] --app-package [APP-PACKAGE]")]
pub struct Cli {
    /// Android app .apk file
    #[arg(long, value_name = "APP-APK-FILE")]
    pub apk_file: Option<PathBuf>,

    /// Android app package [default: com.cisco.sv]
    #[arg(long, value_name = "APP-PACKAGE")]
    pub app_package: Option<String>,

    /// Android SDK path
    #[arg(long, value_name = "SDK-PATH")]
    pub sdk_path: Option<PathBuf>,

    /// Android app launch activity name
    #[arg(long, value_name = "ACTIVITY-NAME")]
    pub launch_activity: Option<String>,

    /// Path to the adb executable (overrides --sdk-path)
    #[arg(long, value_name = "ADB-PATH")]
    pub adb: Option<PathBuf>,

    /// Output NDJSON events for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v shows adb output for each step)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Command-line portion of the configuration
    pub fn resolve_request(&self) -> ResolveRequest {
        ResolveRequest {
            apk_file: self.apk_file.clone(),
            app_package: self.app_package.clone(),
            sdk_path: self.sdk_path.clone(),
            launch_activity: self.launch_activity.clone(),
            adb: self.adb.clone(),
        }
    }
}
