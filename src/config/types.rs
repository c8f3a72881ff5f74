//! Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level config file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub android: AndroidConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// `[android]` section: defaults for the matching CLI flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AndroidConfig {
    /// Explicit bridge executable; wins over `sdk_path`
    #[serde(default)]
    pub adb: Option<PathBuf>,

    #[serde(default)]
    pub sdk_path: Option<PathBuf>,

    #[serde(default)]
    pub app_package: Option<String>,

    #[serde(default)]
    pub launch_activity: Option<String>,
}

/// Color output mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// `[output]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}
