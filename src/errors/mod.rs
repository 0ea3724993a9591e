//! Custom error types for boardbrew

mod types;

pub use types::*;
