//! Device Discovery
//!
//! Runs `adb devices` and extracts the identifiers of online devices.
//!
//! The listing is a fixed header line followed by `<id>\t<state>` rows:
//!
//! ```text
//! List of devices attached
//! ABC123	device
//! XYZ999	offline
//! ```
//!
//! Only rows whose state is exactly `device` are kept; `offline`,
//! `unauthorized` and rows with no state are skipped.

use crate::bridge::{devices_args, Bridge};
use crate::error::DeployResult;
use crate::events::{DeployEvent, DeployEventSink};
use crate::models::DeviceId;

/// State keyword `adb devices` uses for a usable device.
pub const ONLINE_STATE: &str = "device";

/// Parse `adb devices` output into online device ids, in listed order.
///
/// Handles both `\n` and `\r\n` line endings. Fields are split on runs of
/// whitespace, so indentation is ignored and a row without an id is skipped.
/// Duplicates are kept.
pub fn parse_device_list(output: &str) -> Vec<DeviceId> {
    output
        .lines()
        .skip(1)
        .filter_map(|line| {
            let mut tokens = line.split_whitespace();
            let id = tokens.next()?;
            let state = tokens.next()?;
            (state == ONLINE_STATE).then(|| DeviceId::new(id))
        })
        .collect()
}

/// List online devices, reporting each one as it is found.
///
/// The bridge's exit status is not consulted: whatever it printed is parsed.
/// An empty result is not an error; callers decide how to report it.
pub fn discover_devices(
    bridge: &dyn Bridge,
    sink: &dyn DeployEventSink,
) -> DeployResult<Vec<DeviceId>> {
    sink.on_event(DeployEvent::DiscoveryStarted {
        bridge: bridge.program().to_path_buf(),
    });

    let output = bridge.run(&devices_args())?;
    if output.stdout.is_empty() {
        return Ok(Vec::new());
    }

    let devices = parse_device_list(&output.stdout);
    for device in &devices {
        sink.on_event(DeployEvent::DeviceDetected {
            device: device.clone(),
        });
    }

    Ok(devices)
}
