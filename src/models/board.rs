//! Board-related data models

use serde::{Deserialize, Serialize};

/// Immutable board manifest resolved from the registry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardRecord {
    /// Unique identifier used on the command line and in `[env:...]` sections
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Development platform (e.g. "atmelavr", "espressif8266")
    pub platform: String,
    /// Supported frameworks; the first entry is the default
    pub frameworks: Vec<String>,
    /// Target MCU
    pub mcu: String,
    /// CPU frequency as written into build flags (e.g. "16000000L")
    pub f_cpu: String,
    /// Build attributes consumed verbatim by IDE metadata generation
    pub build: BoardBuild,
}

impl BoardRecord {
    /// Default framework for newly created environments
    pub fn default_framework(&self) -> &str {
        self.frameworks
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Toolchain and framework package attributes of a board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardBuild {
    /// Framework package directory name (e.g. "framework-arduinoavr")
    pub package: String,
    /// Core directory inside the framework package
    pub core: String,
    /// Pin variant directory, when the framework has one
    #[serde(default)]
    pub variant: Option<String>,
    /// Toolchain package directory name (e.g. "toolchain-atmelavr")
    pub toolchain: String,
    /// Compiler executable prefix (e.g. "avr-" for avr-gcc)
    pub gcc_prefix: String,
    /// Preprocessor defines, without the leading "-D"
    pub defines: Vec<String>,
}

/// Registry entry shape exposed by `boards --json-output`
#[derive(Debug, Clone, Serialize)]
pub struct BoardSummary {
    pub id: String,
    pub name: String,
    pub platform: String,
    pub frameworks: Vec<String>,
    pub mcu: String,
    pub f_cpu: String,
}

impl From<&BoardRecord> for BoardSummary {
    fn from(record: &BoardRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            platform: record.platform.clone(),
            frameworks: record.frameworks.clone(),
            mcu: record.mcu.clone(),
            f_cpu: record.f_cpu.clone(),
        }
    }
}
