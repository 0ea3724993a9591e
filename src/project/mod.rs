//! Project directory skeleton and configuration synthesis

pub mod skeleton;
pub mod synthesizer;

pub use skeleton::ensure_skeleton;
pub use synthesizer::{MergeOptions, merge_boards};
