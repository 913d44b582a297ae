//! Synoscore library crate (used by the server binary and integration tests).
//!
//! # Public API Surface
//!
//! ## Core Types (Stable)
//! - [`SynopsisScorer`], [`ScoreReport`], [`DetailedScores`] - Evaluation engine
//! - [`ScoringConfig`], [`ScoreError`] - Engine tunables and failures
//! - [`Config`], [`ConfigError`] - Server configuration
//!
//! ## Similarity Backends
//! - [`SimilarityOracle`], [`OracleKind`] - The injected similarity capability
//! - [`TfidfOracle`] - Model-free TF-IDF cosine backend
//! - [`EmbeddingOracle`], [`EmbedderConfig`] - Transformer-embedding backend
//!
//! ## Text Utilities
//! - [`SentenceSplit`], [`RuleSplitter`] - Sentence segmentation capability
//! - [`anonymize`] - Privacy masking applied ahead of scoring
//! - [`extract_text`] - Plain-text article loading
//!
//! ## Constants
//! Scoring weights, feedback bands, and per-backend thresholds live in
//! [`constants`] so the engine, the gateway, and the tests share one source
//! of truth.
//!
//! ## Test/Mock Support
//! Mock oracles are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod extract;
pub mod gateway;
pub mod hashing;
pub mod privacy;
pub mod scoring;
pub mod segment;
pub mod similarity;

pub use config::{Config, ConfigError};
pub use extract::{ExtractError, extract_text};
pub use hashing::{hash_text, request_digest};
pub use privacy::anonymize;
pub use scoring::{DetailedScores, ScoreError, ScoreReport, ScoringConfig, SynopsisScorer, chunk};
pub use segment::{RuleSplitter, SentenceSplit};
pub use similarity::{
    EmbedderConfig, EmbeddingOracle, OracleError, OracleKind, SimilarityOracle, TfidfOracle,
};

#[cfg(any(test, feature = "mock"))]
pub use similarity::mock::{ConstOracle, FailingOracle, ScriptedOracle};
