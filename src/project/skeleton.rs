//! Canonical project directory layout

use std::fs;
use std::path::Path;

use log::debug;

use crate::config::{PROJECT_CONFIG_NAME, ProjectConfig};
use crate::errors::Result;

/// Ensure the standard layout exists under `project_dir` and return the
/// loaded project configuration.
///
/// Creates the directory itself, `src/`, `lib/` and an empty (banner-only)
/// configuration file when missing. Idempotent: existing files and
/// directories are left untouched.
pub fn ensure_skeleton(project_dir: &Path) -> Result<ProjectConfig> {
    fs::create_dir_all(project_dir.join("src"))?;
    fs::create_dir_all(project_dir.join("lib"))?;

    let config_path = project_dir.join(PROJECT_CONFIG_NAME);
    let config = ProjectConfig::load(&config_path)?;
    if !config_path.exists() {
        debug!("creating {}", config_path.display());
        config.save(&config_path)?;
    }

    Ok(config)
}
