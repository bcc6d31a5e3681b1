//! Root configuration type and loading functionality.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::gaps::GapsConfig;
use super::solver::SolverSettings;

/// Root configuration structure for `ZoneSnap`.
///
/// Every section is optional; missing values fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ZoneSnapConfig {
    /// JSON Schema reference for editor support.
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Global gap settings.
    pub gaps: GapsConfig,

    /// Minimum-size solver tunables.
    pub solver: SolverSettings,
}

/// Errors that can occur when loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    #[error(
        "No configuration file found. Expected at ~/.config/zonesnap/config.jsonc or ~/.zonesnap.jsonc"
    )]
    NotFound,

    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file contains invalid JSON.
    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Legacy configuration file names in home directory.
const LEGACY_CONFIG_FILE_NAMES: &[&str] = &[".zonesnap.jsonc", ".zonesnap.json"];

/// Application directory name under the config roots.
const APP_DIR: &str = "zonesnap";

/// Returns the possible configuration file paths in priority order.
///
/// 1. `$XDG_CONFIG_HOME/zonesnap/config.jsonc` or `config.json`
/// 2. `~/.config/zonesnap/config.jsonc` or `config.json`
/// 3. The platform config directory (`dirs::config_dir()`)
/// 4. `~/.zonesnap.jsonc` or `~/.zonesnap.json`
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    let mut push_dir = |dir: PathBuf| {
        for filename in CONFIG_FILE_NAMES {
            let path = dir.join(filename);
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    };

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        push_dir(PathBuf::from(xdg_config).join(APP_DIR));
    }
    if let Some(home) = dirs::home_dir() {
        push_dir(home.join(".config").join(APP_DIR));
    }
    if let Some(config_dir) = dirs::config_dir() {
        push_dir(config_dir.join(APP_DIR));
    }

    if let Some(home) = dirs::home_dir() {
        for filename in LEGACY_CONFIG_FILE_NAMES {
            paths.push(home.join(filename));
        }
    }

    paths
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of the expected locations.
/// Returns `ConfigError::Io` if a configuration file exists but could not be read.
/// Returns `ConfigError::Parse` if the configuration file contains invalid JSON.
pub fn load_config() -> Result<(ZoneSnapConfig, PathBuf), ConfigError> {
    for path in config_paths() {
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    Err(ConfigError::NotFound)
}

/// Loads the configuration from a specific file.
///
/// Comments (`//` and `/* */`) are stripped before parsing.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist.
/// Returns `ConfigError::Io` if the file could not be read.
/// Returns `ConfigError::Parse` if the file contains invalid JSON.
pub fn load_config_from_path(path: &Path) -> Result<(ZoneSnapConfig, PathBuf), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let file = fs::File::open(path)?;
    let reader = json_comments::StripComments::new(file);
    let config: ZoneSnapConfig = serde_json::from_reader(reader)?;
    tracing::debug!(path = %path.display(), "config: loaded configuration");
    Ok((config, path.to_path_buf()))
}
