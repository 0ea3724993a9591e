//! Merged build-flag computation across configured environments

use crate::boards::BoardLookup;
use crate::config::ProjectConfig;
use crate::errors::{BoardBrewError, Result};

/// Root of the installed toolchain/framework packages
pub const PACKAGES_ROOT: &str = "~/.platformio/packages";

/// Build flags merged over every configured environment.
///
/// Token order follows section order, so the primary (first-inserted)
/// environment's include paths and defines come first; duplicates keep
/// their first occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedFlags {
    /// Include directories, primary environment foremost
    pub includes: Vec<String>,
    /// Preprocessor defines without the leading "-D"
    pub defines: Vec<String>,
    /// Toolchain package of the primary environment
    pub toolchain: String,
    /// Compiler executable prefix of the primary environment
    pub gcc_prefix: String,
}

impl MergedFlags {
    /// Path to the primary environment's C compiler
    pub fn gcc_path(&self) -> String {
        format!(
            "{}/{}/bin/{}gcc",
            PACKAGES_ROOT, self.toolchain, self.gcc_prefix
        )
    }

    /// Flat `-I`/`-D` token sequence, includes first
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens = Vec::with_capacity(self.includes.len() + self.defines.len());
        tokens.extend(self.includes.iter().map(|inc| format!("-I{}", inc)));
        tokens.extend(self.defines.iter().map(|def| format!("-D{}", def)));
        tokens
    }
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

/// Resolve every environment's board and merge the flag sets.
///
/// Flags are recomputed from the registry on every call; nothing is
/// cached in the configuration document.
pub fn merge_flags(config: &ProjectConfig, lookup: &dyn BoardLookup) -> Result<MergedFlags> {
    let mut includes = Vec::new();
    let mut defines = Vec::new();
    let mut toolchain = None;
    let mut gcc_prefix = None;

    for section in config.sections() {
        let board_id = section.get("board").ok_or(BoardBrewError::BoardNotDefined)?;
        let record = lookup.resolve(board_id)?;
        let build = &record.build;

        let package_root = format!("{}/{}", PACKAGES_ROOT, build.package);
        push_unique(&mut includes, format!("{}/cores/{}", package_root, build.core));
        if let Some(variant) = &build.variant {
            push_unique(&mut includes, format!("{}/variants/{}", package_root, variant));
        }

        push_unique(&mut defines, format!("F_CPU={}", record.f_cpu));
        for define in &build.defines {
            push_unique(&mut defines, define.clone());
        }

        if toolchain.is_none() {
            toolchain = Some(build.toolchain.clone());
            gcc_prefix = Some(build.gcc_prefix.clone());
        }
    }

    Ok(MergedFlags {
        includes,
        defines,
        // merge_flags is only called on non-empty documents
        toolchain: toolchain.unwrap_or_default(),
        gcc_prefix: gcc_prefix.unwrap_or_default(),
    })
}
