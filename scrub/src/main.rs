// scrub/src/main.rs
//! Scrub entry point: parses the CLI, bootstraps logging, and dispatches to
//! the subcommand runners.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use scrub::cli::{Cli, Commands};
use scrub::commands;
use scrub::logger;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.debug {
        Some(log::LevelFilter::Debug)
    } else if cli.quiet {
        Some(log::LevelFilter::Off)
    } else {
        None
    };
    logger::init_logger(level);

    match cli.command {
        Commands::Sanitize(cmd) => commands::sanitize::run(cmd),
        Commands::Scan(cmd) => commands::scan::run(cmd),
    }
}
