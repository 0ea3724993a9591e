//! Command line argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::boards::{BoardLookup, BoardRegistry};
use crate::ide::IdeKind;

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(name = "boardbrew")]
#[command(about = "🛠️  Embedded Project Initializer - Sets up board environments and IDE metadata!")]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease logging verbosity (only errors)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Initialize a project directory for the given boards
    Init {
        /// Target project directory (defaults to the current directory)
        #[arg(short = 'd', long = "dir", value_name = "PATH")]
        dir: Option<PathBuf>,

        /// Board identifier to configure (repeatable, see `boardbrew boards`)
        #[arg(
            short = 'b',
            long = "board",
            value_name = "ID",
            value_parser = parse_board_id
        )]
        board: Vec<String>,

        /// Generate project descriptor files for this IDE
        #[arg(long, value_enum, value_name = "KIND")]
        ide: Option<IdeKind>,

        /// Add `targets = upload` to newly created environments
        #[arg(long = "enable-auto-uploading")]
        enable_auto_uploading: bool,
    },
    /// List boards known to the bundled registry
    Boards {
        /// Filter by substring of id, name or platform
        #[arg(value_name = "FILTER")]
        filter: Option<String>,

        /// Emit the board list as JSON
        #[arg(long = "json-output")]
        json_output: bool,
    },
}

/// Validate a `--board` value against the registry.
///
/// Rejecting unknown identifiers here keeps them in the argument-parsing
/// path, so the command exits with the usage error code instead of a
/// runtime failure.
fn parse_board_id(value: &str) -> Result<String, String> {
    BoardRegistry::bundled()
        .resolve(value)
        .map(|record| record.id.clone())
        .map_err(|err| err.to_string())
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn known_board_passes_argument_validation() {
        let cli = Cli::try_parse_from(["boardbrew", "init", "-b", "uno", "-b", "teensy31"]);
        match cli.unwrap().command {
            Commands::Init { board, .. } => assert_eq!(board, ["uno", "teensy31"]),
            _ => panic!("expected init command"),
        }
    }

    #[test]
    fn unknown_board_is_a_usage_error() {
        let err = Cli::try_parse_from(["boardbrew", "init", "-b", "missed_board"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("missed_board"));
    }

    #[test]
    fn ide_kind_parses_from_its_cli_name() {
        let cli = Cli::try_parse_from(["boardbrew", "init", "-b", "uno", "--ide", "atom"]).unwrap();
        match cli.command {
            Commands::Init { ide, .. } => assert_eq!(ide, Some(IdeKind::Atom)),
            _ => panic!("expected init command"),
        }
    }
}
