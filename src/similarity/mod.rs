//! Similarity oracles.
//!
//! The engine consumes similarity as an injected capability: a symmetric,
//! deterministic score over two text spans, roughly in `[-1, 1]`. Two
//! backends ship here:
//!
//! - [`TfidfOracle`] - cosine over TF-IDF vectors of the two spans; no
//!   model files, similarities land in `[0, 1]`.
//! - [`EmbeddingOracle`] - cosine over mean-pooled transformer embeddings
//!   (candle + tokenizers), with a deterministic stub mode for tests and
//!   model-less deployments.
//!
//! Coverage thresholds are backend-tuning parameters, not engine logic;
//! [`OracleKind::default_coverage_threshold`] carries each backend's
//! default.

/// Transformer-embedding backend.
pub mod embedder;
mod error;
/// TF-IDF cosine backend.
pub mod tfidf;

/// Device selection (CPU / Metal / CUDA).
pub mod device;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use embedder::{EmbedderConfig, EmbeddingOracle};
pub use error::OracleError;
pub use tfidf::TfidfOracle;

use crate::constants::{EMBEDDING_COVERAGE_THRESHOLD, TFIDF_COVERAGE_THRESHOLD};

/// Identifies which similarity backend an oracle runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OracleKind {
    /// TF-IDF cosine over the two input spans.
    Tfidf,
    /// Transformer-embedding cosine with a loaded model.
    Embedding,
    /// Transformer path with deterministic stub embeddings.
    EmbeddingStub,
}

impl OracleKind {
    /// Coverage threshold tuned to this backend's similarity distribution.
    ///
    /// TF-IDF similarities on chunk-vs-synopsis pairs run lower than
    /// embedding cosines for equally related texts, so the backends carry
    /// different defaults.
    pub fn default_coverage_threshold(&self) -> f32 {
        match self {
            OracleKind::Tfidf => TFIDF_COVERAGE_THRESHOLD,
            OracleKind::Embedding | OracleKind::EmbeddingStub => EMBEDDING_COVERAGE_THRESHOLD,
        }
    }

    /// Short label used in logs and the ready endpoint.
    pub fn label(&self) -> &'static str {
        match self {
            OracleKind::Tfidf => "tfidf",
            OracleKind::Embedding => "embedding",
            OracleKind::EmbeddingStub => "embedding-stub",
        }
    }

    /// Parses a label back into a kind. Inverse of [`OracleKind::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "tfidf" => Some(OracleKind::Tfidf),
            "embedding" => Some(OracleKind::Embedding),
            "embedding-stub" => Some(OracleKind::EmbeddingStub),
            _ => None,
        }
    }
}

impl std::fmt::Display for OracleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Injected capability scoring the similarity of two text spans.
///
/// Implementations must be symmetric in their arguments, deterministic for
/// fixed inputs, and return higher values for more similar spans.
pub trait SimilarityOracle: Send + Sync {
    /// Scores the similarity of `a` and `b`.
    fn similarity(&self, a: &str, b: &str) -> Result<f32, OracleError>;

    /// Identifies the backend (drives coverage-threshold defaults and
    /// status reporting).
    fn kind(&self) -> OracleKind;
}
