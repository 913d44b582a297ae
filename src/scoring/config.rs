//! Scoring configuration.

use crate::constants::{DEFAULT_TARGET_CHUNKS, IDEAL_LENGTH_RATIO, TFIDF_COVERAGE_THRESHOLD};
use crate::similarity::OracleKind;

use super::error::ScoreError;

/// Tunables for one evaluation pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Chunk similarities strictly above this count toward coverage.
    ///
    /// Must be tuned to the oracle's similarity distribution; TF-IDF
    /// cosines run lower than embedding cosines for related prose.
    pub coverage_threshold: f32,
    /// Target number of article chunks. The actual count tracks the
    /// sentence count for short articles.
    pub target_chunks: usize,
    /// Synopsis-to-article word ratio that earns full length marks.
    pub ideal_length_ratio: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            coverage_threshold: TFIDF_COVERAGE_THRESHOLD,
            target_chunks: DEFAULT_TARGET_CHUNKS,
            ideal_length_ratio: IDEAL_LENGTH_RATIO,
        }
    }
}

impl ScoringConfig {
    /// Configuration with the coverage threshold tuned to `kind`.
    pub fn for_oracle(kind: OracleKind) -> Self {
        Self {
            coverage_threshold: kind.default_coverage_threshold(),
            ..Self::default()
        }
    }

    pub fn with_coverage_threshold(mut self, threshold: f32) -> Self {
        self.coverage_threshold = threshold;
        self
    }

    pub fn with_target_chunks(mut self, target_chunks: usize) -> Self {
        self.target_chunks = target_chunks;
        self
    }

    pub fn with_ideal_length_ratio(mut self, ratio: f64) -> Self {
        self.ideal_length_ratio = ratio;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ScoreError> {
        if !(self.coverage_threshold > 0.0 && self.coverage_threshold < 1.0) {
            return Err(ScoreError::InvalidConfig {
                reason: format!(
                    "coverage_threshold must be in (0, 1), got {}",
                    self.coverage_threshold
                ),
            });
        }
        if self.target_chunks == 0 {
            return Err(ScoreError::InvalidConfig {
                reason: "target_chunks must be at least 1".to_string(),
            });
        }
        if !(self.ideal_length_ratio > 0.0 && self.ideal_length_ratio < 1.0) {
            return Err(ScoreError::InvalidConfig {
                reason: format!(
                    "ideal_length_ratio must be in (0, 1), got {}",
                    self.ideal_length_ratio
                ),
            });
        }
        Ok(())
    }
}
