//! Command Line Interface module
//!
//! Argument parsing and the command implementations dispatched from main.

pub mod args;
pub mod commands;

pub use args::*;

use anyhow::Result;

/// Main CLI application runner
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    crate::utils::logging::init_cli_logging(cli.verbose, cli.quiet)?;
    commands::execute_command(cli.command.clone())
}
