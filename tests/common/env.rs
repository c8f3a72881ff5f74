//! Test environment for running the apk-deploy binary in isolation.
//!
//! `TestEnv` creates:
//! - a project directory (the binary's working directory) holding an APK
//! - an empty config home so no user config leaks in
//! - a fake Android SDK whose `platform-tools/adb` is a shell script that
//!   logs every invocation and prints a canned device listing

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running the apk-deploy CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestEnv {
    root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        let env = Self {
            root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_apk-deploy")),
        };

        fs::create_dir_all(env.project_dir()).unwrap();
        fs::create_dir_all(env.config_home()).unwrap();
        fs::create_dir_all(env.home_dir()).unwrap();
        fs::create_dir_all(env.sdk_path().join("platform-tools")).unwrap();
        fs::write(env.apk_path(), b"PK\x03\x04fake-apk").unwrap();
        env.write_fake_adb();
        env
    }

    pub fn project_dir(&self) -> PathBuf {
        self.root.path().join("project")
    }

    pub fn config_home(&self) -> PathBuf {
        self.root.path().join("config")
    }

    pub fn home_dir(&self) -> PathBuf {
        self.root.path().join("home")
    }

    pub fn sdk_path(&self) -> PathBuf {
        self.root.path().join("sdk")
    }

    pub fn adb_path(&self) -> PathBuf {
        self.sdk_path().join("platform-tools").join("adb")
    }

    pub fn apk_path(&self) -> PathBuf {
        self.project_dir().join("app-debug.apk")
    }

    pub fn sdk_arg(&self) -> String {
        self.sdk_path().display().to_string()
    }

    pub fn apk_arg(&self) -> String {
        self.apk_path().display().to_string()
    }

    fn log_path(&self) -> PathBuf {
        self.sdk_path().join("adb.log")
    }

    /// Set what the fake `adb devices` prints
    pub fn with_devices(&self, listing: &str) -> &Self {
        fs::write(self.sdk_path().join("devices.txt"), listing).unwrap();
        self
    }

    /// Make the fake `adb uninstall` exit with status 1
    pub fn fail_uninstall(&self) -> &Self {
        fs::write(self.sdk_path().join("fail-uninstall"), "").unwrap();
        self
    }

    /// Write `apk-deploy.toml` into the project directory
    pub fn write_project_config(&self, toml: &str) {
        fs::write(self.project_dir().join("apk-deploy.toml"), toml).unwrap();
    }

    /// Write the user-level config file
    pub fn write_user_config(&self, toml: &str) {
        let dir = self.config_home().join("apk-deploy");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), toml).unwrap();
    }

    /// Invocations of the fake adb, one argument vector per call
    pub fn adb_calls(&self) -> Vec<Vec<String>> {
        let log = fs::read_to_string(self.log_path()).unwrap_or_default();
        log.lines()
            .map(|line| {
                line.strip_suffix('\u{1f}')
                    .unwrap_or(line)
                    .split('\u{1f}')
                    .map(str::to_string)
                    .collect()
            })
            .collect()
    }

    /// Calls reduced to `<device> <subcommand>` (or `devices`)
    pub fn adb_call_summary(&self) -> Vec<String> {
        self.adb_calls()
            .iter()
            .map(|call| match call.as_slice() {
                [flag, device, sub, ..] if flag == "-s" => format!("{} {}", device, sub),
                _ => call.join(" "),
            })
            .collect()
    }

    pub fn clear_adb_log(&self) {
        let _ = fs::remove_file(self.log_path());
    }

    /// Run apk-deploy from the project directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_dir())
            .args(args)
            .env("HOME", self.home_dir())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("APK_DEPLOY_ADB")
            .env_remove("APK_DEPLOY_SDK_PATH")
            .env_remove("APK_DEPLOY_APP_PACKAGE")
            .env_remove("APK_DEPLOY_LAUNCH_ACTIVITY")
            .env_remove("APK_DEPLOY_COLOR");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        to_result(cmd.output().expect("Failed to execute apk-deploy"))
    }

    fn write_fake_adb(&self) {
        let dir = self.sdk_path();
        let script = format!(
            r#"#!/bin/sh
DIR='{dir}'
for arg in "$@"; do printf '%s\037' "$arg"; done >> "$DIR/adb.log"
echo >> "$DIR/adb.log"
if [ "$1" = "devices" ]; then
  [ -f "$DIR/devices.txt" ] && cat "$DIR/devices.txt"
  exit 0
fi
case "$3" in
  uninstall)
    if [ -f "$DIR/fail-uninstall" ]; then
      echo "Failure [DELETE_FAILED_INTERNAL_ERROR]"
      exit 1
    fi
    echo "Success" ;;
  install)
    echo "Performing Streamed Install"
    echo "Success" ;;
  shell)
    echo "Starting: Intent {{ act=$7 cmp=$9 }}" ;;
esac
exit 0
"#,
            dir = dir.display()
        );

        let path = self.adb_path();
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Create an empty SDK directory without `platform-tools/adb`
pub fn empty_sdk(root: &Path) -> PathBuf {
    let sdk = root.join("empty-sdk");
    fs::create_dir_all(&sdk).unwrap();
    sdk
}
