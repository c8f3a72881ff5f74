//! Configuration module for apk-deploy
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (APK_DEPLOY_*)
//! 3. Project config (./apk-deploy.toml)
//! 4. User config (~/.config/apk-deploy/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Only the first config file found is read; files are not merged.

mod env_validator;
mod loader;
mod types;

pub use env_validator::EnvWarning;
pub use loader::{
    candidate_paths, load_layered, load_with_warnings, with_env_overrides_from, ConfigWarning,
    LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{AndroidConfig, ColorMode, Config, OutputConfig};
