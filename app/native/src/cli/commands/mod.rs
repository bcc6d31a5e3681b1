//! CLI command definitions using Clap.
//!
//! - `resolve` - Resolve a layout file against a screen and enforce minimum sizes
//! - `template` - Print a built-in layout
//! - `types` - Argument types shared across commands

use std::io;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::error::ZoneSnapError;
use crate::{config, schema};

pub mod resolve;
pub mod template;
pub mod types;

pub use resolve::ResolveArgs;
use types::{SchemaTarget, TemplateKind};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// `ZoneSnap` CLI - resolve zone layouts into window geometry.
#[derive(Parser, Debug)]
#[command(name = "zonesnap")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Resolve a layout file into pixel rectangles.
    ///
    /// Applies the configured gaps and, when `--min` is given, enforces
    /// minimum window sizes on the result.
    Resolve(ResolveArgs),

    /// Print a built-in layout as JSON.
    ///
    /// The output can be saved and edited as a layout file.
    Template {
        /// Template to print.
        #[arg(value_enum)]
        kind: TemplateKind,

        /// Number of columns (columns, grid) or rows (rows).
        #[arg(long, short = 'n', default_value_t = 2)]
        count: u32,

        /// Number of rows for the grid template.
        #[arg(long, short, default_value_t = 2)]
        rows: u32,
    },

    /// Output a JSON Schema.
    ///
    /// Outputs the schema for layout files (default) or the configuration
    /// file. Can be redirected to a file for use with editors that support
    /// JSON Schema validation.
    Schema {
        /// Which schema to print.
        #[arg(value_enum, default_value_t = SchemaTarget::Layout)]
        target: SchemaTarget,
    },

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    ///
    /// Usage:
    ///   eval "$(zonesnap completions --shell zsh)"
    ///   zonesnap completions --shell fish > ~/.config/fish/completions/zonesnap.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<std::path::PathBuf> {
        self.config.as_ref().map(std::path::PathBuf::from)
    }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), ZoneSnapError> {
        if let Some(path_buf) = self.config_path() {
            if !path_buf.exists() {
                return Err(ZoneSnapError::ConfigError(format!(
                    "Configuration file not found: {}",
                    path_buf.display()
                )));
            }
            config::set_custom_config_path(path_buf);
        }

        match &self.command {
            Commands::Resolve(args) => resolve::execute(args),

            Commands::Template { kind, count, rows } => template::execute(*kind, *count, *rows),

            Commands::Schema { target } => {
                let schema_output = match target {
                    SchemaTarget::Layout => schema::print_schema(),
                    SchemaTarget::Config => schema::print_config_schema(),
                };
                println!("{schema_output}");
                Ok(())
            }

            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "zonesnap", &mut io::stdout());
    }
}
