//! Configuration types for `ZoneSnap`.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

pub mod gaps;
pub mod root;
pub mod solver;

// Gap types
pub use gaps::{DEFAULT_OUTER_GAP, DEFAULT_ZONE_PADDING, GapsConfig};
// Root config types
pub use root::{ConfigError, ZoneSnapConfig, config_paths, load_config, load_config_from_path};
// Solver types
pub use solver::SolverSettings;
