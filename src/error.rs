//! Error types for navtree
//!
//! Uses `thiserror` for library errors. The tree operations themselves are
//! infallible; errors only come from loading schemas, configs and event
//! scripts.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for navtree operations
pub type NavResult<T> = Result<T, NavError>;

/// Main error type for navtree operations
#[derive(Error, Debug)]
pub enum NavError {
    /// A schema node breaks the leaf/branch shape rules
    #[error("invalid nav item '{path}': {reason}")]
    InvalidSchema { path: String, reason: String },

    /// Schema document could not be deserialized
    #[error("failed to parse schema {file}: {message}")]
    SchemaParse { file: PathBuf, message: String },

    /// Schema file extension is not toml, json, yaml or yml
    #[error("unsupported schema format: {file} (expected .toml, .json, .yaml or .yml)")]
    UnsupportedFormat { file: PathBuf },

    /// Event text did not match `route <route>` or `toggle <name>`
    #[error("invalid event '{input}' - expected 'route <route>' or 'toggle <name>'")]
    InvalidEvent { input: String },

    /// Config file could not be deserialized
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
