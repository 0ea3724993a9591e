//! Data models and types used throughout boardbrew

pub mod board;

pub use board::*;
