//! apk-deploy - deploy an Android APK to every connected device
//!
//! A run resolves its configuration, lists the devices `adb` reports as
//! online, and then for each device uninstalls the previous package,
//! installs the APK and optionally starts an activity.

pub mod bridge;
pub mod config;
pub mod deploy;
pub mod discovery;
pub mod error;
pub mod events;
pub mod models;
pub mod pipeline;
pub mod presentation;
pub mod resolve;

// Re-exports for convenience
pub use bridge::{AdbBridge, Bridge, BridgeOutput};
pub use config::{ColorMode, Config, OutputConfig};
pub use deploy::{deploy_all, deploy_device, plan_device, PlannedStep};
pub use discovery::{discover_devices, parse_device_list};
pub use error::{DeployError, DeployResult};
pub use events::{DeployEvent, DeployEventSink};
pub use models::{DeployStep, DeploySummary, DeviceId, DeviceReport, RunConfig, StepOutcome};
pub use pipeline::{run, RunOutcome};
pub use resolve::{resolve, ResolveRequest};
