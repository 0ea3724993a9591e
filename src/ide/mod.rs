//! IDE descriptor generation from the merged project configuration

pub mod atom;
pub mod eclipse;
pub mod flags;

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::info;

use crate::boards::BoardLookup;
use crate::config::ProjectConfig;
use crate::errors::{BoardBrewError, Result};
use crate::utils::fs_utils::write_atomic;

pub use flags::MergedFlags;

/// Supported IDE descriptor targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdeKind {
    /// Editor with compiler-flag completion (.clang_complete, .gcc-flags.json)
    Atom,
    /// Eclipse CDT workspace (.project, .cproject)
    Eclipse,
}

impl IdeKind {
    /// Fixed file set generated for this kind
    pub fn file_names(&self) -> &'static [&'static str] {
        match self {
            IdeKind::Atom => &[".clang_complete", ".gcc-flags.json"],
            IdeKind::Eclipse => &[".project", ".cproject"],
        }
    }
}

/// Generate the descriptor files for `kind` under `project_dir`.
///
/// Every configured environment's board is re-resolved through `lookup`,
/// so descriptor content always reflects the current registry snapshot.
/// All files are rendered in memory before anything is written; a failed
/// resolution leaves existing descriptors untouched. Each run fully
/// overwrites the per-kind file set.
pub fn generate(
    kind: IdeKind,
    project_dir: &Path,
    config: &ProjectConfig,
    lookup: &dyn BoardLookup,
) -> Result<Vec<PathBuf>> {
    if config.is_empty() {
        return Err(BoardBrewError::BoardNotDefined);
    }

    let flags = flags::merge_flags(config, lookup)?;
    let project_name = project_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string());

    let files: Vec<(&str, String)> = match kind {
        IdeKind::Atom => atom::render(&flags)?,
        IdeKind::Eclipse => eclipse::render(&project_name, &flags),
    };

    let mut written = Vec::with_capacity(files.len());
    for (name, content) in files {
        let path = project_dir.join(name);
        write_atomic(&path, &content)?;
        info!("generated {}", path.display());
        written.push(path);
    }
    Ok(written)
}
