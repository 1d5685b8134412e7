//! src/error.rs
//!
//! Error types for graph construction and settings loading.

use std::path::PathBuf;

/// Raised while constructing a graph; nothing fails once a graph exists.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("container must be defined")]
    MissingContainer,
    #[error("height must be a number")]
    InvalidHeight,
    #[error("width must be a number")]
    InvalidWidth,
    #[error("container has no `{0}` canvas")]
    MissingSurface(String),
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
