//! Evaluation reports.

use serde::{Deserialize, Serialize};

/// Per-dimension sub-scores, clamped to `[0, 100]` and rounded to one
/// decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetailedScores {
    pub content_coverage: f64,
    pub coherence: f64,
    pub clarity: f64,
    pub length_ratio: f64,
}

/// Outcome of one synopsis evaluation. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Weighted combination of the sub-scores, in `[0, 100]`.
    pub final_score: f64,
    pub detailed_scores: DetailedScores,
    /// At most three observations, in metric order.
    pub feedback: Vec<String>,
}

/// Sub-scores as the scorer computes them: unrounded, and possibly
/// outside `[0, 100]` (coherence goes negative when the oracle does).
/// Feedback thresholds and the weighted sum both read these raw values.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SubScores {
    pub content_coverage: f64,
    pub coherence: f64,
    pub clarity: f64,
    pub length_ratio: f64,
}

impl ScoreReport {
    /// Builds a report from raw values. Clamping and one-decimal rounding
    /// happen here, once, at the output boundary.
    pub(crate) fn from_raw(final_score: f64, scores: &SubScores, feedback: Vec<String>) -> Self {
        Self {
            final_score: round1(final_score.clamp(0.0, 100.0)),
            detailed_scores: DetailedScores {
                content_coverage: round1(scores.content_coverage.clamp(0.0, 100.0)),
                coherence: round1(scores.coherence.clamp(0.0, 100.0)),
                clarity: round1(scores.clarity.clamp(0.0, 100.0)),
                length_ratio: round1(scores.length_ratio.clamp(0.0, 100.0)),
            },
            feedback,
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
