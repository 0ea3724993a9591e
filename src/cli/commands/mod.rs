//! CLI command implementations

pub mod boards;
pub mod init;

use crate::cli::args::Commands;
use anyhow::Result;

/// Execute a CLI command
pub fn execute_command(command: Commands) -> Result<()> {
    match command {
        Commands::Init {
            dir,
            board,
            ide,
            enable_auto_uploading,
        } => init::execute_init_command(dir, &board, ide, enable_auto_uploading),
        Commands::Boards {
            filter,
            json_output,
        } => boards::execute_boards_command(filter.as_deref(), json_output),
    }
}
