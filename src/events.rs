//! Deploy Event Port
//!
//! Everything the user sees while a run progresses is delivered as a
//! [`DeployEvent`]. The binary renders events as text or as an NDJSON stream.

use std::path::PathBuf;

use crate::models::{DeployStep, DeviceId, RunConfig, StepOutcome};

/// Event emitted during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Configuration resolved and validated
    ConfigResolved { config: RunConfig },

    /// Device listing is about to run
    DiscoveryStarted { bridge: PathBuf },

    /// An online device was found
    DeviceDetected { device: DeviceId },

    /// Discovery found no online devices; the run ends successfully
    NoDevices,

    /// A deployment step is about to run.
    ///
    /// `subject` is the package (uninstall), APK file name (install) or
    /// activity (launch).
    StepStarted {
        device: DeviceId,
        step: DeployStep,
        subject: String,
    },

    /// A deployment step finished; `output` is the captured bridge stdout
    StepFinished {
        device: DeviceId,
        step: DeployStep,
        outcome: StepOutcome,
        output: String,
    },

    /// All devices processed
    Completed {
        device_count: usize,
        failed_steps: usize,
    },
}

/// Trait for receiving deploy events
pub trait DeployEventSink {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// Event sink that keeps every event, for assertions in tests.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingEventSink {
    pub events: std::sync::Mutex<Vec<DeployEvent>>,
}

#[cfg(test)]
impl RecordingEventSink {
    pub fn events(&self) -> Vec<DeployEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl DeployEventSink for RecordingEventSink {
    fn on_event(&self, event: DeployEvent) {
        self.events.lock().unwrap().push(event);
    }
}
