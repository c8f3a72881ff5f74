//! NDJSON output (`--json`)

#![cfg(unix)]

mod common;

use common::*;
use serde_json::Value;

fn events(stdout: &str) -> Vec<Value> {
    stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad line {l:?}: {e}")))
        .collect()
}

fn kinds(events: &[Value]) -> Vec<&str> {
    events
        .iter()
        .map(|e| e["event"].as_str().unwrap_or_default())
        .collect()
}

#[test]
fn json_stream_covers_full_run() {
    let env = TestEnv::new();
    env.with_devices(ONE_ONLINE_ONE_OFFLINE);
    let sdk = env.sdk_arg();
    let apk = env.apk_arg();

    let result = env.run(&[
        "--json",
        "--sdk-path",
        &sdk,
        "--apk-file",
        &apk,
        "--launch-activity",
        ".Main",
    ]);

    assert!(result.success, "stderr: {}", result.stderr);
    let events = events(&result.stdout);
    assert_eq!(
        kinds(&events),
        [
            "config",
            "discovery_start",
            "device",
            "step_start",
            "step_finish",
            "step_start",
            "step_finish",
            "step_start",
            "step_finish",
            "complete",
        ]
    );

    assert_eq!(events[0]["app_package"], "com.cisco.sv");
    assert_eq!(events[0]["launch_activity"], ".Main");
    assert_eq!(events[2]["id"], "ABC123");
    assert_eq!(events[3]["step"], "uninstall");
    assert_eq!(events[4]["success"], true);
    assert_eq!(events[4]["exit_code"], 0);
    assert!(events[4].get("output").is_none());
    assert_eq!(events[9]["devices"], 1);
    assert_eq!(events[9]["failed_steps"], 0);
}

#[test]
fn json_reports_failed_step() {
    let env = TestEnv::new();
    env.with_devices(ONE_ONLINE_ONE_OFFLINE).fail_uninstall();
    let sdk = env.sdk_arg();
    let apk = env.apk_arg();

    let result = env.run(&["--json", "-v", "--sdk-path", &sdk, "--apk-file", &apk]);

    assert!(result.success);
    let events = events(&result.stdout);
    let uninstall = events
        .iter()
        .find(|e| e["event"] == "step_finish" && e["step"] == "uninstall")
        .unwrap();
    assert_eq!(uninstall["success"], false);
    assert_eq!(uninstall["exit_code"], 1);
    assert!(uninstall["output"]
        .as_str()
        .unwrap()
        .contains("DELETE_FAILED_INTERNAL_ERROR"));
    assert_eq!(events.last().unwrap()["failed_steps"], 1);
}

#[test]
fn json_no_devices() {
    let env = TestEnv::new();
    env.with_devices(HEADER_ONLY);
    let sdk = env.sdk_arg();
    let apk = env.apk_arg();

    let result = env.run(&["--json", "--sdk-path", &sdk, "--apk-file", &apk]);

    assert!(result.success);
    assert_eq!(
        kinds(&events(&result.stdout)),
        ["config", "discovery_start", "no_devices"]
    );
}

#[test]
fn json_error_event_on_stdout() {
    let env = TestEnv::new();
    let sdk = env.sdk_arg();

    let result = env.run(&["--json", "--sdk-path", &sdk]);

    assert_eq!(result.exit_code, 1);
    let events = events(&result.stdout);
    assert_eq!(kinds(&events), ["error"]);
    assert_eq!(events[0]["message"], "No Android .apk app file given");
}

#[test]
fn json_invalid_color_env_is_a_warning_event() {
    let env = TestEnv::new();
    env.with_devices(HEADER_ONLY);
    let sdk = env.sdk_arg();
    let apk = env.apk_arg();

    let result = env.run_with_env(
        &["--json", "--sdk-path", &sdk, "--apk-file", &apk],
        &[("APK_DEPLOY_COLOR", "nevr")],
    );

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(!result.stderr.contains("APK_DEPLOY_COLOR"));
    let events = events(&result.stdout);
    assert_eq!(
        kinds(&events),
        ["warning", "config", "discovery_start", "no_devices"]
    );
    assert_eq!(events[0]["kind"], "env");
    assert_eq!(events[0]["var"], "APK_DEPLOY_COLOR");
    assert_eq!(events[0]["value"], "nevr");
    assert_eq!(events[0]["suggestion"], "never");
}

#[test]
fn json_unknown_config_key_is_a_warning_event() {
    let env = TestEnv::new();
    env.with_devices(HEADER_ONLY);
    env.write_project_config("[android]\nsdk_pth = \"/opt/sdk\"\n");
    let sdk = env.sdk_arg();
    let apk = env.apk_arg();

    let result = env.run(&["--json", "--sdk-path", &sdk, "--apk-file", &apk]);

    assert!(result.success, "stderr: {}", result.stderr);
    let events = events(&result.stdout);
    assert_eq!(events[0]["event"], "warning");
    assert_eq!(events[0]["kind"], "config_key");
    assert_eq!(events[0]["key"], "sdk_pth");
    assert_eq!(events[0]["line"], 2);
    assert_eq!(events[0]["suggestion"], "sdk_path");
}
