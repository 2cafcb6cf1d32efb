//! # quantmd
//!
//! **CLI Binary**
//!
//! This is the entry point for the `quantmd` command-line application.
//! It orchestrates the other crates to perform the requested actions.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Read CSV input
//! * Dispatch commands to appropriate handlers
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

use anyhow::Result;
use clap::Parser;

use quantmd_config::{Cli, Commands};

mod commands;

/// Receipt timestamp; the only clock in the workspace.
pub(crate) fn now_ms() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// Entry point used by the `quantmd` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Convert(args) => commands::convert::handle(args, &cli.global),
        Commands::Table(args) => commands::table::handle(args, &cli.global),
        Commands::Stats(args) => commands::stats::handle(args, &cli.global),
        Commands::Completions(args) => {
            commands::completions::handle(&args);
            Ok(())
        }
    }
}

/// Render an error chain for stderr.
#[must_use]
pub fn format_error(err: &anyhow::Error) -> String {
    let mut out = format!("error: {err}");
    for cause in err.chain().skip(1) {
        out.push_str(&format!("\n  caused by: {cause}"));
    }
    out
}
