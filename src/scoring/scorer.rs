//! Synopsis evaluation.

use std::sync::Arc;

use tracing::debug;

use crate::constants::{
    CLARITY_IDEAL_MAX, CLARITY_IDEAL_MIN, CLARITY_LENGTH_CAP, CLARITY_RAMP, WEIGHT_CLARITY,
    WEIGHT_COHERENCE, WEIGHT_COVERAGE, WEIGHT_LENGTH_RATIO,
};
use crate::segment::SentenceSplit;
use crate::similarity::{OracleKind, SimilarityOracle};

use super::chunker::chunk;
use super::config::ScoringConfig;
use super::error::ScoreError;
use super::feedback::generate_feedback;
use super::report::{ScoreReport, SubScores};

/// Scores how well a synopsis represents its source article.
///
/// Holds the injected similarity oracle and sentence splitter. Evaluation
/// touches no mutable state, so one scorer is safely shared across
/// concurrent callers.
pub struct SynopsisScorer {
    oracle: Arc<dyn SimilarityOracle>,
    splitter: Arc<dyn SentenceSplit>,
    config: ScoringConfig,
}

impl SynopsisScorer {
    /// Creates a scorer after validating `config`.
    pub fn new(
        oracle: Arc<dyn SimilarityOracle>,
        splitter: Arc<dyn SentenceSplit>,
        config: ScoringConfig,
    ) -> Result<Self, ScoreError> {
        config.validate()?;
        Ok(Self {
            oracle,
            splitter,
            config,
        })
    }

    /// Evaluates `synopsis` against `article` and returns the full report.
    ///
    /// A pure function of its inputs: nothing is mutated, and a
    /// deterministic oracle yields an identical report on every call. The
    /// oracle is consulted once per article chunk; its first failure
    /// abandons the whole evaluation with no partial result.
    pub fn evaluate(&self, article: &str, synopsis: &str) -> Result<ScoreReport, ScoreError> {
        if article.trim().is_empty() {
            return Err(ScoreError::InvalidInput {
                field: "article".to_string(),
            });
        }
        if synopsis.trim().is_empty() {
            return Err(ScoreError::InvalidInput {
                field: "synopsis".to_string(),
            });
        }

        let article_sentences = self.splitter.split(article);
        if article_sentences.is_empty() {
            return Err(ScoreError::InsufficientContent {
                reason: "article yields no sentences".to_string(),
            });
        }

        let chunks = chunk(&article_sentences, self.config.target_chunks);
        if chunks.is_empty() {
            return Err(ScoreError::InsufficientContent {
                reason: "article yields no chunks".to_string(),
            });
        }

        let synopsis_sentences = self.splitter.split(synopsis);
        if synopsis_sentences.is_empty() {
            return Err(ScoreError::InsufficientContent {
                reason: "synopsis yields no sentences".to_string(),
            });
        }

        debug!(
            article_sentences = article_sentences.len(),
            chunks = chunks.len(),
            oracle = %self.oracle.kind(),
            "Evaluating synopsis"
        );

        let mut similarities = Vec::with_capacity(chunks.len());
        for chunk_text in &chunks {
            similarities.push(self.oracle.similarity(chunk_text, synopsis)?);
        }

        let covered = similarities
            .iter()
            .filter(|&&sim| sim > self.config.coverage_threshold)
            .count();
        let content_coverage = covered as f64 / chunks.len() as f64 * 100.0;

        let avg_similarity =
            similarities.iter().map(|&sim| f64::from(sim)).sum::<f64>() / similarities.len() as f64;
        let coherence = avg_similarity * 100.0;

        let clarity = clarity_score(&synopsis_sentences);

        let actual_ratio =
            word_count(synopsis) as f64 / word_count(article).max(1) as f64;
        let ideal_ratio = self.config.ideal_length_ratio;
        let deviation = ((actual_ratio - ideal_ratio).abs() / ideal_ratio).min(1.0);
        let length_ratio = (1.0 - deviation) * 100.0;

        let scores = SubScores {
            content_coverage,
            coherence,
            clarity,
            length_ratio,
        };

        let final_score = WEIGHT_COVERAGE * content_coverage
            + WEIGHT_COHERENCE * coherence
            + WEIGHT_CLARITY * clarity
            + WEIGHT_LENGTH_RATIO * length_ratio;

        debug!(
            content_coverage,
            coherence,
            clarity,
            length_ratio,
            final_score,
            "Computed sub-scores"
        );

        let feedback = generate_feedback(&scores, actual_ratio, ideal_ratio);

        Ok(ScoreReport::from_raw(final_score, &scores, feedback))
    }

    /// Kind of the oracle backing this scorer.
    pub fn oracle_kind(&self) -> OracleKind {
        self.oracle.kind()
    }

    /// Returns the scoring configuration.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }
}

/// Clarity from average sentence length in words: full marks inside the
/// ideal band, a linear ramp down to zero at the cap. Averages below the
/// band are never penalized, only overlong sentences are.
fn clarity_score(sentences: &[String]) -> f64 {
    let total_words: usize = sentences.iter().map(|s| word_count(s)).sum();
    let avg_sentence_length = total_words as f64 / sentences.len().max(1) as f64;

    let penalty = if (CLARITY_IDEAL_MIN..=CLARITY_IDEAL_MAX).contains(&avg_sentence_length) {
        0.0
    } else {
        ((avg_sentence_length.min(CLARITY_LENGTH_CAP) - CLARITY_IDEAL_MAX) / CLARITY_RAMP)
            .clamp(0.0, 1.0)
    };

    (1.0 - penalty) * 100.0
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
