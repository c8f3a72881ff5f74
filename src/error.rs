//! Error types for apk-deploy
//!
//! Library code returns `DeployError` via `thiserror`; the binary wraps it in
//! `anyhow` at the top level.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for apk-deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for apk-deploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// The device bridge could not be resolved to an executable
    #[error("Could not find the 'adb' executable. Use the --sdk-path option.")]
    BridgeNotFound { bridge: PathBuf },

    /// No `--apk-file` was supplied
    #[error("No Android .apk app file given")]
    MissingApkFile,

    /// The APK path does not exist or is a directory
    #[error("Could not find Android apk app file: {}", path.display())]
    ApkNotFound { path: PathBuf },

    /// The bridge process could not be spawned
    #[error("failed to run '{}': {source}", bridge.display())]
    BridgeSpawn {
        bridge: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be parsed
    #[error("invalid config file {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
