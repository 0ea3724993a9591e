//! boardbrew - Embedded Project Initializer
//!
//! boardbrew sets up embedded-development project directories: it resolves
//! board identifiers against a registry, merges per-board environments into
//! the project configuration file, creates the canonical directory skeleton
//! and optionally generates IDE descriptor files from the merged build
//! configuration.

pub mod boards;
pub mod cli;
pub mod config;
pub mod errors;
pub mod ide;
pub mod models;
pub mod project;
pub mod utils;

// Re-export commonly used types
pub use errors::*;
pub use models::*;

/// boardbrew version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// boardbrew application name
pub const APP_NAME: &str = "boardbrew";
