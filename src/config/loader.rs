//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DeployError, DeployResult};

use super::env_validator::{levenshtein, EnvVarValidator, EnvWarning};
use super::types::{ColorMode, Config};

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "apk-deploy.toml";

const ENV_ADB: &str = "APK_DEPLOY_ADB";
const ENV_SDK_PATH: &str = "APK_DEPLOY_SDK_PATH";
const ENV_APP_PACKAGE: &str = "APK_DEPLOY_APP_PACKAGE";
const ENV_LAUNCH_ACTIVITY: &str = "APK_DEPLOY_LAUNCH_ACTIVITY";
const ENV_COLOR: &str = "APK_DEPLOY_COLOR";

const KNOWN_KEYS: &[&str] = &[
    "android",
    "adb",
    "sdk_path",
    "app_package",
    "launch_activity",
    "output",
    "color",
    "unicode",
];

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Config after file lookup and, once applied, env overrides.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from, if any
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
    /// Rejected `APK_DEPLOY_*` values
    pub env_warnings: Vec<EnvWarning>,
}

impl LoadedConfig {
    /// Apply environment variable overrides (APK_DEPLOY_* prefix)
    pub fn with_env_overrides(self) -> Self {
        with_env_overrides_from(self, |key| std::env::var(key).ok())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Config files to try, in priority order.
pub fn candidate_paths(project_root: &Path, user_config_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = vec![project_root.join(PROJECT_CONFIG_FILE)];
    if let Some(dir) = user_config_dir {
        paths.push(dir.join("apk-deploy").join("config.toml"));
    }
    paths
}

/// Load the first config file that exists, or defaults.
///
/// A file that exists but does not parse is an error.
pub fn load_layered(project_root: &Path) -> DeployResult<LoadedConfig> {
    let user_dir = user_config_dir();
    for path in candidate_paths(project_root, user_dir.as_deref()) {
        if !path.is_file() {
            continue;
        }
        let (config, warnings) = load_with_warnings(&path)?;
        return Ok(LoadedConfig {
            config,
            source: Some(path),
            warnings,
            env_warnings: Vec::new(),
        });
    }

    Ok(LoadedConfig::default())
}

/// Apply overrides from an arbitrary environment.
///
/// Empty values are ignored. An invalid color falls back to `auto` and is
/// recorded in [`LoadedConfig::env_warnings`].
pub fn with_env_overrides_from(
    mut loaded: LoadedConfig,
    get_env: impl Fn(&str) -> Option<String>,
) -> LoadedConfig {
    let get = |key: &str| get_env(key).filter(|v| !v.trim().is_empty());
    let android = &mut loaded.config.android;

    if let Some(adb) = get(ENV_ADB) {
        android.adb = Some(PathBuf::from(adb));
    }
    if let Some(sdk) = get(ENV_SDK_PATH) {
        android.sdk_path = Some(PathBuf::from(sdk));
    }
    if let Some(package) = get(ENV_APP_PACKAGE) {
        android.app_package = Some(package);
    }
    if let Some(activity) = get(ENV_LAUNCH_ACTIVITY) {
        android.launch_activity = Some(activity);
    }

    if let Some(color) = get(ENV_COLOR) {
        let validator = EnvVarValidator::new(ENV_COLOR, &["auto", "always", "never"]);
        loaded.config.output.color = match validator.parse(&color, ColorMode::parse) {
            Ok(mode) => mode,
            Err(warning) => {
                loaded.env_warnings.push(warning);
                ColorMode::Auto
            }
        };
    }

    loaded
}

/// `$XDG_CONFIG_HOME`, falling back to `~/.config`
fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}
