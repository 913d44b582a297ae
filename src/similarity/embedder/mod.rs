//! Embedding-backed similarity oracle (BERT safetensors + tokenizer).
//!
//! Use [`EmbedderConfig::stub`] for tests/deployments without model files.

/// Embedding oracle configuration.
pub mod config;
pub(crate) mod model;


pub use config::EmbedderConfig;

use std::sync::Arc;

use candle_core::{Device, Tensor};
use moka::sync::Cache;
use tracing::{debug, info, warn};

use crate::hashing::hash_text;

use super::device::select_device;
use super::error::OracleError;
use super::{OracleKind, SimilarityOracle};

use model::BertForEmbedding;

enum OracleBackend {
    Model {
        model: BertForEmbedding,
        tokenizer: tokenizers::Tokenizer,
        device: Device,
    },
    Stub,
}

/// Similarity oracle over mean-pooled sentence embeddings.
///
/// Embeddings are memoized per input span, so a synopsis compared against
/// every chunk of an article is embedded once rather than once per chunk.
pub struct EmbeddingOracle {
    backend: OracleBackend,
    config: EmbedderConfig,
    memo: Cache<[u8; 32], Arc<Vec<f32>>>,
}

impl std::fmt::Debug for EmbeddingOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingOracle")
            .field(
                "backend",
                &match &self.backend {
                    OracleBackend::Model { device, .. } => format!("Model({:?})", device),
                    OracleBackend::Stub => "Stub".to_string(),
                },
            )
            .field("embedding_dim", &self.config.embedding_dim)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl EmbeddingOracle {
    /// Loads the oracle from a config (stub mode is supported).
    pub fn load(config: EmbedderConfig) -> Result<Self, OracleError> {
        config.validate()?;

        let memo = Cache::new(config.cache_capacity);

        if config.testing_stub {
            warn!("Embedding oracle running in STUB mode (testing only)");
            return Ok(Self {
                backend: OracleBackend::Stub,
                config,
                memo,
            });
        }

        let device = select_device();
        debug!(?device, "Selected compute device for embedding oracle");

        let (model, tokenizer) = Self::load_model(&config, &device)?;

        info!(
            model_dir = %config.model_dir.display(),
            embedding_dim = config.embedding_dim,
            max_seq_len = config.max_seq_len,
            hidden_size = model.hidden_size(),
            "Embedding model loaded"
        );

        Ok(Self {
            backend: OracleBackend::Model {
                model,
                tokenizer,
                device,
            },
            config,
            memo,
        })
    }

    fn load_model(
        config: &EmbedderConfig,
        device: &Device,
    ) -> Result<(BertForEmbedding, tokenizers::Tokenizer), OracleError> {
        let model_dir = config.model_dir();

        if !model_dir.join("model.safetensors").is_file() {
            return Err(OracleError::ModelNotFound {
                path: model_dir.to_path_buf(),
            });
        }

        let tokenizer = tokenizers::Tokenizer::from_file(model_dir.join("tokenizer.json"))
            .map_err(|e| OracleError::TokenizationFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            })?;

        let model = BertForEmbedding::load(model_dir, device).map_err(|e| {
            OracleError::ModelLoadFailed {
                reason: format!("Failed to load encoder: {}", e),
            }
        })?;

        if config.embedding_dim != model.hidden_size() {
            return Err(OracleError::InvalidConfig {
                reason: format!(
                    "embedding_dim ({}) does not match model hidden_size ({})",
                    config.embedding_dim,
                    model.hidden_size()
                ),
            });
        }

        Ok((model, tokenizer))
    }

    /// Generates (or recalls) the unit-length embedding for one span.
    pub fn embed(&self, text: &str) -> Result<Arc<Vec<f32>>, OracleError> {
        let key = hash_text(text);
        if let Some(hit) = self.memo.get(&key) {
            return Ok(hit);
        }

        let embedding = match &self.backend {
            OracleBackend::Model {
                model,
                tokenizer,
                device,
            } => self.embed_with_model(text, model, tokenizer, device)?,
            OracleBackend::Stub => self.embed_stub(text),
        };

        let embedding = Arc::new(embedding);
        self.memo.insert(key, Arc::clone(&embedding));
        Ok(embedding)
    }

    fn embed_with_model(
        &self,
        text: &str,
        model: &BertForEmbedding,
        tokenizer: &tokenizers::Tokenizer,
        device: &Device,
    ) -> Result<Vec<f32>, OracleError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| OracleError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        let mut tokens: Vec<u32> = encoding.get_ids().to_vec();
        if tokens.is_empty() {
            return Ok(vec![0.0; self.config.embedding_dim]);
        }

        if tokens.len() > self.config.max_seq_len {
            tokens.truncate(self.config.max_seq_len);
        }

        debug!(
            text_len = text.len(),
            token_count = tokens.len(),
            "Generating embedding (transformer forward pass)"
        );

        // Input tensor: [1, seq_len]
        let input_ids = Tensor::new(&tokens[..], device)
            .and_then(|t| t.unsqueeze(0))
            .map_err(|e| OracleError::InferenceFailed {
                reason: format!("Failed to build input tensor: {}", e),
            })?;

        let token_type_ids =
            input_ids
                .zeros_like()
                .map_err(|e| OracleError::InferenceFailed {
                    reason: format!("Failed to build token type ids: {}", e),
                })?;

        let hidden = model.forward(&input_ids, &token_type_ids).map_err(|e| {
            OracleError::InferenceFailed {
                reason: format!("Transformer forward pass failed: {}", e),
            }
        })?;

        // Mean pooling over the token axis. The single sequence carries no
        // padding, so this equals attention-mask weighted pooling.
        let embedding = hidden
            .sum(1)
            .and_then(|t| t / (tokens.len() as f64))
            .and_then(|t| t.squeeze(0))
            .and_then(|t| t.to_vec1::<f32>())
            .map_err(|e| OracleError::InferenceFailed {
                reason: format!("Failed to pool embedding: {}", e),
            })?;

        Ok(normalize(embedding))
    }

    fn embed_stub(&self, text: &str) -> Vec<f32> {
        use std::hash::{DefaultHasher, Hash, Hasher};

        debug!(text_len = text.len(), "Generating stub embedding");

        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let seed = hasher.finish();

        let mut embedding = Vec::with_capacity(self.config.embedding_dim);
        let mut state = seed;

        for _ in 0..self.config.embedding_dim {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let value = ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0;
            embedding.push(value);
        }

        normalize(embedding)
    }

    /// Returns the configured output embedding dimension.
    pub fn embedding_dim(&self) -> usize {
        self.config.embedding_dim
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, OracleBackend::Stub)
    }

    /// Returns `true` if a model is loaded.
    pub fn has_model(&self) -> bool {
        matches!(self.backend, OracleBackend::Model { .. })
    }

    /// Returns the oracle configuration.
    pub fn config(&self) -> &EmbedderConfig {
        &self.config
    }
}

impl SimilarityOracle for EmbeddingOracle {
    fn similarity(&self, a: &str, b: &str) -> Result<f32, OracleError> {
        let va = self.embed(a)?;
        let vb = self.embed(b)?;
        Ok(cosine(&va, &vb))
    }

    fn kind(&self) -> OracleKind {
        if self.is_stub() {
            OracleKind::EmbeddingStub
        } else {
            OracleKind::Embedding
        }
    }
}

fn normalize(mut embedding: Vec<f32>) -> Vec<f32> {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm > 0.0 {
        for x in &mut embedding {
            *x /= norm;
        }
    }

    embedding
}

fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
