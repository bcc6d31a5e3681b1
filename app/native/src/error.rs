//! Error types for `ZoneSnap`.
//!
//! The geometry engine itself never fails; these errors cover the surfaces
//! around it (configuration, layout files, CLI arguments).

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur during application execution.
///
/// Serializes as `{"kind": ..., "message": ...}` so JSON consumers get
/// structured error information.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum ZoneSnapError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// A layout file could not be parsed.
    #[error("Layout error: {0}")]
    LayoutError(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
    /// Generic command error.
    #[error("{0}")]
    CommandError(String),
}

impl From<std::io::Error> for ZoneSnapError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for ZoneSnapError {
    fn from(err: serde_json::Error) -> Self { Self::CommandError(err.to_string()) }
}

impl From<ConfigError> for ZoneSnapError {
    fn from(err: ConfigError) -> Self { Self::ConfigError(err.to_string()) }
}

impl From<String> for ZoneSnapError {
    fn from(msg: String) -> Self { Self::CommandError(msg) }
}

impl From<&str> for ZoneSnapError {
    fn from(msg: &str) -> Self { Self::CommandError(msg.to_string()) }
}
