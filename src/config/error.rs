//! Configuration errors.

use std::net::AddrParseError;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse port value '{value}': {source}")]
    PortParseError {
        value: String,
        source: ParseIntError,
    },

    #[error("Invalid port: {value} (must be 1-65535)")]
    InvalidPort { value: String },

    #[error("Invalid bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        source: AddrParseError,
    },

    #[error("Path not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Unknown oracle backend '{value}' (expected tfidf, embedding, or embedding-stub)")]
    InvalidOracle { value: String },

    #[error("Invalid coverage threshold '{value}': must be a number in (0, 1)")]
    InvalidThreshold { value: String },

    #[error("Target chunk count must be at least 1")]
    InvalidTargetChunks,

    #[error("The embedding oracle requires SYNOSCORE_MODEL_PATH to point at a model directory")]
    ModelPathRequired,
}
