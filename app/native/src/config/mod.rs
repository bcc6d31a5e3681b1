//! Configuration module for `ZoneSnap`.
//!
//! This module provides the configuration types and a process-wide instance
//! loaded once on first use.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

pub mod types;

use std::path::PathBuf;
use std::sync::OnceLock;

pub use types::{
    ConfigError, DEFAULT_OUTER_GAP, DEFAULT_ZONE_PADDING, GapsConfig, SolverSettings,
    ZoneSnapConfig, config_paths, load_config as load_config_default, load_config_from_path,
};

/// Global configuration instance, loaded once.
static CONFIG: OnceLock<ZoneSnapConfig> = OnceLock::new();

/// Custom config path override (set via CLI --config flag).
static CUSTOM_CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Sets a custom configuration file path to use instead of the default search paths.
///
/// This must be called before `get_config()` to take effect.
///
/// Returns `false` if a path was already set.
pub fn set_custom_config_path(path: PathBuf) -> bool { CUSTOM_CONFIG_PATH.set(path).is_ok() }

/// Loads the configuration from disk, falling back to defaults.
fn load_or_default() -> ZoneSnapConfig {
    let result = CUSTOM_CONFIG_PATH
        .get()
        .map_or_else(load_config_default, |path| load_config_from_path(path));

    match result {
        Ok((config, _)) => config,
        Err(ConfigError::NotFound) => {
            tracing::debug!("config: no configuration file found, using defaults");
            ZoneSnapConfig::default()
        }
        Err(err) => {
            tracing::warn!(error = %err, "config: failed to load configuration, using defaults");
            ZoneSnapConfig::default()
        }
    }
}

/// Returns the global configuration instance, loading it on first use.
///
/// If no configuration file is found, returns the default configuration.
pub fn get_config() -> &'static ZoneSnapConfig { CONFIG.get_or_init(load_or_default) }
