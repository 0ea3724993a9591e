//! Init command implementation

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use crate::boards::BoardRegistry;
use crate::config::PROJECT_CONFIG_NAME;
use crate::ide::{self, IdeKind};
use crate::project::{MergeOptions, ensure_skeleton, merge_boards};

/// Initialize a project directory and merge the requested boards.
///
/// The board identifiers were already validated by the argument parser;
/// failures past this point are core errors, not usage errors.
pub fn execute_init_command(
    dir: Option<PathBuf>,
    boards: &[String],
    ide_kind: Option<IdeKind>,
    enable_auto_uploading: bool,
) -> Result<()> {
    let project_dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    info!("initializing project in {}", project_dir.display());

    let registry = BoardRegistry::bundled();
    let mut config = ensure_skeleton(&project_dir)
        .with_context(|| format!("Failed to set up {}", project_dir.display()))?;

    let options = MergeOptions {
        enable_auto_uploading,
    };
    let added = merge_boards(&mut config, registry, boards, options)?;
    config.save(&project_dir.join(PROJECT_CONFIG_NAME))?;

    if added > 0 {
        println!("🔧 Added {} environment(s) to {}", added, PROJECT_CONFIG_NAME);
    }

    if let Some(kind) = ide_kind {
        let written = ide::generate(kind, &project_dir, &config, registry)?;
        println!("📝 Generated IDE metadata:");
        for path in &written {
            println!("  - {}", path.display());
        }
    }

    println!("✅ Project initialized in {}", project_dir.display());
    Ok(())
}
