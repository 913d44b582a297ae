//! Scoring errors.

use thiserror::Error;

use crate::similarity::OracleError;

/// Errors from synopsis evaluation.
///
/// An evaluation is atomic: any of these means no report was produced and
/// no partial scores exist anywhere.
#[derive(Error, Debug)]
pub enum ScoreError {
    /// An input was empty or whitespace-only.
    #[error("Invalid input: {field} is empty or whitespace-only")]
    InvalidInput { field: String },

    /// Inputs were non-empty but too thin to measure.
    #[error("Insufficient content: {reason}")]
    InsufficientContent { reason: String },

    /// The similarity oracle failed for some chunk pair.
    #[error("Similarity oracle failure: {0}")]
    Oracle(#[from] OracleError),

    /// Scoring configuration failed validation.
    #[error("Invalid scoring configuration: {reason}")]
    InvalidConfig { reason: String },
}
