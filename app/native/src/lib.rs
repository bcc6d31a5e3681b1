//! `ZoneSnap` - zone layouts and window geometry.
//!
//! This library resolves zone layouts into pixel rectangles with configurable
//! gaps and enforces per-window minimum sizes on the result. The `zonesnap`
//! binary exposes the engine through a small CLI.

pub mod cli;
pub mod config;
pub mod error;
pub mod schema;
pub mod zones;
