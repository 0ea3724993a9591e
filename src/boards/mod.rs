//! Board resolution against the bundled registry

pub mod registry;

pub use registry::{BoardLookup, BoardRegistry};
