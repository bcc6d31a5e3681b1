#![allow(clippy::multiple_crate_versions)]

//! `ZoneSnap` command-line entry point.
//!
//! Logs go to stderr and are filtered with `RUST_LOG` (default `warn`).

use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    if let Err(err) = zonesnap_lib::cli::run() {
        eprintln!("zonesnap: {err}");
        std::process::exit(1);
    }
}
