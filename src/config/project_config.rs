//! Ordered-section store for the project configuration file
//!
//! The on-disk format is the INI-like grammar of `platformio.ini`:
//! `[env:<board>]` section headers followed by `key = value` options.
//! Section order is insertion order and survives load/save cycles; the
//! first section is the primary environment.

use std::fs;
use std::path::Path;

use crate::errors::{BoardBrewError, Result};
use crate::utils::fs_utils::write_atomic;

/// File name of the project configuration at the project root
pub const PROJECT_CONFIG_NAME: &str = "platformio.ini";

/// Section name prefix binding a section to a board identifier
pub const ENV_SECTION_PREFIX: &str = "env:";

/// Banner written ahead of the sections; keeps a fresh file non-empty
const CONFIG_BANNER: &str = "\
; Project Configuration File
;
; Each [env:<board>] section describes one build environment.
; Run `boardbrew boards` for the list of known board identifiers.
";

/// Section name for a board's environment (e.g. "env:uno")
pub fn env_section_name(board_id: &str) -> String {
    format!("{}{}", ENV_SECTION_PREFIX, board_id)
}

/// One named configuration section with ordered options
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    name: String,
    options: Vec<(String, String)>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Board identifier for `env:` sections
    pub fn board_id(&self) -> Option<&str> {
        self.name.strip_prefix(ENV_SECTION_PREFIX)
    }

    /// Append an option, keeping the first value on duplicate keys
    pub fn push_option(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if self.get(&key).is_none() {
            self.options.push((key, value.into()));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn options(&self) -> &[(String, String)] {
        &self.options
    }
}

/// In-memory project configuration document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectConfig {
    sections: Vec<Section>,
}

impl ProjectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the document from `path`.
    ///
    /// A missing file yields an empty document; malformed content is a
    /// `ConfigParse` error and never silently discarded.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse the section/key-value grammar
    pub fn parse(content: &str) -> Result<Self> {
        let mut config = Self::new();

        for (index, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            let line_no = index + 1;

            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                let name = name.trim();
                if name.is_empty() {
                    return Err(BoardBrewError::ConfigParse {
                        line: line_no,
                        message: "empty section name".to_string(),
                    });
                }
                if config.has_section(name) {
                    return Err(BoardBrewError::ConfigParse {
                        line: line_no,
                        message: format!("duplicate section [{}]", name),
                    });
                }
                config.sections.push(Section::new(name));
            } else if let Some((key, value)) = line.split_once('=') {
                let section = config.sections.last_mut().ok_or_else(|| {
                    BoardBrewError::ConfigParse {
                        line: line_no,
                        message: "option outside of any section".to_string(),
                    }
                })?;
                section.push_option(key.trim(), value.trim());
            } else {
                return Err(BoardBrewError::ConfigParse {
                    line: line_no,
                    message: format!("expected `[section]` or `key = value`, got `{}`", line),
                });
            }
        }

        Ok(config)
    }

    /// Persist the document to `path` as a whole-file replace
    pub fn save(&self, path: &Path) -> Result<()> {
        write_atomic(path, &self.render())
    }

    /// Serialize the banner and all sections in stored order
    pub fn render(&self) -> String {
        let mut out = String::from(CONFIG_BANNER);
        for section in &self.sections {
            out.push('\n');
            out.push_str(&format!("[{}]\n", section.name));
            for (key, value) in &section.options {
                out.push_str(&format!("{} = {}\n", key, value));
            }
        }
        out
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.iter().any(|section| section.name == name)
    }

    /// Ordered key/value pairs of a section, when it exists
    pub fn items(&self, name: &str) -> Option<&[(String, String)]> {
        self.sections
            .iter()
            .find(|section| section.name == name)
            .map(|section| section.options())
    }

    /// Append a section; the caller guarantees the name is not taken
    pub fn add_section(&mut self, section: Section) {
        debug_assert!(!self.has_section(section.name()));
        self.sections.push(section);
    }

    /// Sections in insertion order; the first one is the primary environment
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }
}
