//! Embedding oracle configuration.

use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_EMBED_CACHE_CAPACITY, DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN};

use super::super::error::OracleError;

/// Configuration for [`super::EmbeddingOracle`].
#[derive(Debug, Clone)]
pub struct EmbedderConfig {
    /// Directory holding `config.json`, `tokenizer.json` and
    /// `model.safetensors` for a BERT-family sentence encoder.
    pub model_dir: PathBuf,
    /// Token budget per input; longer inputs are truncated.
    pub max_seq_len: usize,
    /// Dimensionality of the produced vectors.
    pub embedding_dim: usize,
    /// Capacity of the per-oracle embedding memo cache.
    pub cache_capacity: u64,
    /// Use deterministic hash-seeded vectors instead of a real model.
    pub testing_stub: bool,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::new(),
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
            embedding_dim: DEFAULT_EMBEDDING_DIM,
            cache_capacity: DEFAULT_EMBED_CACHE_CAPACITY,
            testing_stub: false,
        }
    }
}

impl EmbedderConfig {
    /// Configuration backed by model files under `model_dir`.
    pub fn new(model_dir: impl Into<PathBuf>) -> Self {
        Self {
            model_dir: model_dir.into(),
            ..Self::default()
        }
    }

    /// Stub configuration for tests and model-free deployments.
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Self::default()
        }
    }

    pub fn with_max_seq_len(mut self, max_seq_len: usize) -> Self {
        self.max_seq_len = max_seq_len;
        self
    }

    pub fn with_embedding_dim(mut self, embedding_dim: usize) -> Self {
        self.embedding_dim = embedding_dim;
        self
    }

    pub fn with_cache_capacity(mut self, cache_capacity: u64) -> Self {
        self.cache_capacity = cache_capacity;
        self
    }

    pub fn model_dir(&self) -> &Path {
        &self.model_dir
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), OracleError> {
        if self.embedding_dim == 0 {
            return Err(OracleError::InvalidConfig {
                reason: "embedding_dim must be greater than zero".to_string(),
            });
        }
        if self.max_seq_len == 0 {
            return Err(OracleError::InvalidConfig {
                reason: "max_seq_len must be greater than zero".to_string(),
            });
        }
        if !self.testing_stub && self.model_dir.as_os_str().is_empty() {
            return Err(OracleError::InvalidConfig {
                reason: "model_dir is required unless testing_stub is set".to_string(),
            });
        }
        Ok(())
    }
}
