//! CLI module for `ZoneSnap`.
//!
//! The CLI loads layout files, resolves them against a screen given on the
//! command line and prints the resulting window geometry.

mod commands;
mod output;

use clap::Parser;
pub use commands::Cli;

use crate::error::ZoneSnapError;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), ZoneSnapError> {
    let cli = Cli::parse();
    cli.execute()
}
