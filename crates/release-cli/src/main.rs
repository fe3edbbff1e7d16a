//! Release Resolver CLI
//!
//! Validates release descriptors and shows the effective packager
//! configuration of a distribution.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)
        .map_err(|e| CliError::user(format!("Failed to initialise logging: {e}")))?;
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Commands::Validate {
            descriptor,
            json,
            parallel,
        } => commands::run_validate(&descriptor, json, parallel),
        Commands::Show {
            descriptor,
            distribution,
            json,
        } => commands::run_show(&descriptor, &distribution, json),
    }
}
