//! layer-guard CLI tool.
//!
//! Usage:
//! ```bash
//! layer-guard [DIR]
//! ```
//!
//! Exits with status 0 when no checked file has a violation, 1 otherwise
//! (including when none of the mapped files exist in `DIR`).

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "LAYER_GUARD_LOG";

/// Layer governance checker for the files of a core source tree
#[derive(Parser)]
#[command(name = "layer-guard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the mapped files (default: current directory)
    #[arg(default_value = ".")]
    path: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if !commands::check::run(&cli.path)? {
        std::process::exit(1);
    }

    Ok(())
}
