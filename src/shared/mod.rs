//! Shared types used across layers.

/// Editor options (TOML)
pub mod options;

pub use options::{EditorOptions, CONFIG_FILE_NAME, DEFAULT_GRID_INTERVAL};
