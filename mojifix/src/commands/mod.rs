//! Implementations of the `mojifix` subcommands.

pub mod posts;
pub mod sanitize;
pub mod scan;

use std::process::ExitCode;

use anyhow::Result;

use crate::cli::Commands;

/// Dispatches a parsed subcommand.
pub fn run(command: Commands, quiet: bool) -> Result<ExitCode> {
    match command {
        Commands::Sanitize(opts) => sanitize::run_sanitize(&opts, quiet).map(|()| ExitCode::SUCCESS),
        Commands::Scan(opts) => scan::run_scan(&opts, quiet),
        Commands::Posts(opts) => posts::run_posts(&opts).map(|()| ExitCode::SUCCESS),
    }
}
