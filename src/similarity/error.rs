use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by similarity oracles.
///
/// Any oracle failure aborts the evaluation that triggered it; the engine
/// never substitutes a default similarity for a failed call.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("embedding model not found at path: {path}")]
    ModelNotFound { path: PathBuf },

    #[error("failed to load embedding model: {reason}")]
    ModelLoadFailed { reason: String },

    #[error("tokenization failed: {reason}")]
    TokenizationFailed { reason: String },

    #[error("similarity inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("invalid oracle configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl From<candle_core::Error> for OracleError {
    fn from(err: candle_core::Error) -> Self {
        OracleError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for OracleError {
    fn from(err: std::io::Error) -> Self {
        OracleError::ModelLoadFailed {
            reason: err.to_string(),
        }
    }
}
