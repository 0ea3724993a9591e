//! Error type shared by the resolver, config store and IDE generator

use std::fmt;

/// Main error type for boardbrew operations
#[derive(Debug)]
pub enum BoardBrewError {
    /// Board identifier with no match in the registry
    UnknownBoard(String),
    /// IDE metadata requested for a project with no configured environment
    BoardNotDefined,
    /// Malformed project configuration file
    ConfigParse { line: usize, message: String },
    /// General I/O errors
    Io(std::io::Error),
    /// Serialization errors
    Serialization(String),
}

impl fmt::Display for BoardBrewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardBrewError::UnknownBoard(id) => {
                write!(f, "Unknown board identifier: {}", id)
            }
            BoardBrewError::BoardNotDefined => {
                write!(
                    f,
                    "No boards are configured for this project. \
                     Add one with `boardbrew init --board <ID>`"
                )
            }
            BoardBrewError::ConfigParse { line, message } => {
                write!(f, "Configuration parse error at line {}: {}", line, message)
            }
            BoardBrewError::Io(err) => write!(f, "I/O error: {}", err),
            BoardBrewError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for BoardBrewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardBrewError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BoardBrewError {
    fn from(err: std::io::Error) -> Self {
        BoardBrewError::Io(err)
    }
}

impl From<serde_json::Error> for BoardBrewError {
    fn from(err: serde_json::Error) -> Self {
        BoardBrewError::Serialization(err.to_string())
    }
}

/// Result type alias for boardbrew operations
pub type Result<T> = std::result::Result<T, BoardBrewError>;
