//! Utility functions and helpers used throughout boardbrew

pub mod fs_utils;
pub mod logging;
