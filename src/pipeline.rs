//! Run pipeline: discovery followed by deployment.

use crate::bridge::Bridge;
use crate::deploy::deploy_all;
use crate::discovery::discover_devices;
use crate::error::DeployResult;
use crate::events::{DeployEvent, DeployEventSink};
use crate::models::{DeploySummary, RunConfig};

/// How a run ended. Both variants are successful exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    NoDevices,
    Deployed(DeploySummary),
}

/// Discover devices and deploy to each of them.
///
/// Only failure to start the device listing is an error; per-device step
/// failures end up in the summary.
pub fn run(
    config: &RunConfig,
    bridge: &dyn Bridge,
    sink: &dyn DeployEventSink,
) -> DeployResult<RunOutcome> {
    sink.on_event(DeployEvent::ConfigResolved {
        config: config.clone(),
    });

    let devices = discover_devices(bridge, sink)?;
    if devices.is_empty() {
        sink.on_event(DeployEvent::NoDevices);
        return Ok(RunOutcome::NoDevices);
    }

    let summary = deploy_all(config, &devices, bridge, sink);
    sink.on_event(DeployEvent::Completed {
        device_count: summary.device_count(),
        failed_steps: summary.failed_steps(),
    });

    Ok(RunOutcome::Deployed(summary))
}
