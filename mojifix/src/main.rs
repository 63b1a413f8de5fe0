// mojifix/src/main.rs
//! mojifix entry point.
//!
//! Parses arguments, sets up logging and dispatches to the chosen command.

use clap::Parser;
use std::process::ExitCode;

use mojifix::cli::Cli;
use mojifix::commands;
use mojifix::logger;
use mojifix::utils::output::error_msg;

fn main() -> ExitCode {
    let args = Cli::parse();

    let level = if args.quiet {
        Some(log::LevelFilter::Off)
    } else if args.debug {
        Some(log::LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    match commands::run(args.command, args.quiet) {
        Ok(code) => code,
        Err(e) => {
            error_msg(format!("{:#}", e));
            ExitCode::from(2)
        }
    }
}
