//! Qualitative feedback generation.
//!
//! Each metric contributes at most one message: an improvement note below
//! 60, praise above 85, silence in between. Messages are collected in
//! metric order (coverage, coherence, clarity, length ratio) and capped at
//! three. Thresholds read the raw sub-scores, not the rounded ones shown
//! in the report.

use crate::constants::{FEEDBACK_HIGH_BAND, FEEDBACK_LOW_BAND, MAX_FEEDBACK_LINES};

use super::report::SubScores;

pub(crate) fn generate_feedback(
    scores: &SubScores,
    actual_ratio: f64,
    ideal_ratio: f64,
) -> Vec<String> {
    let mut feedback = Vec::new();

    if scores.content_coverage < FEEDBACK_LOW_BAND {
        feedback.push(
            "The synopsis misses key information from the article. Consider including more \
             essential points."
                .to_string(),
        );
    } else if scores.content_coverage > FEEDBACK_HIGH_BAND {
        feedback.push("Excellent coverage of the article's main points.".to_string());
    }

    if scores.coherence < FEEDBACK_LOW_BAND {
        feedback.push(
            "The synopsis could be more aligned with the article's focus and structure."
                .to_string(),
        );
    } else if scores.coherence > FEEDBACK_HIGH_BAND {
        feedback.push("The synopsis captures the essence of the article well.".to_string());
    }

    if scores.clarity < FEEDBACK_LOW_BAND {
        feedback
            .push("Consider simplifying sentence structure for better readability.".to_string());
    } else if scores.clarity > FEEDBACK_HIGH_BAND {
        feedback.push("The synopsis is clear and well-structured.".to_string());
    }

    if scores.length_ratio < FEEDBACK_LOW_BAND {
        if actual_ratio < ideal_ratio {
            feedback.push("The synopsis is too brief relative to the article length.".to_string());
        } else {
            feedback.push("The synopsis is too detailed for an effective summary.".to_string());
        }
    }

    feedback.truncate(MAX_FEEDBACK_LINES);
    feedback
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(coverage: f64, coherence: f64, clarity: f64, length: f64) -> SubScores {
        SubScores {
            content_coverage: coverage,
            coherence,
            clarity,
            length_ratio: length,
        }
    }

    #[test]
    fn test_neutral_band_is_silent() {
        let feedback = generate_feedback(&scores(70.0, 75.0, 80.0, 65.0), 0.2, 0.2);
        assert!(feedback.is_empty());
    }

    #[test]
    fn test_band_edges_are_silent() {
        let feedback = generate_feedback(&scores(60.0, 85.0, 60.0, 85.0), 0.2, 0.2);
        assert!(feedback.is_empty());
    }

    #[test]
    fn test_low_coverage_notes_missing_information() {
        let feedback = generate_feedback(&scores(40.0, 70.0, 70.0, 70.0), 0.2, 0.2);
        assert_eq!(feedback.len(), 1);
        assert!(feedback[0].contains("misses key information"));
    }

    #[test]
    fn test_high_scores_earn_praise_in_metric_order() {
        let feedback = generate_feedback(&scores(90.0, 95.0, 99.0, 70.0), 0.2, 0.2);
        assert_eq!(
            feedback,
            [
                "Excellent coverage of the article's main points.",
                "The synopsis captures the essence of the article well.",
                "The synopsis is clear and well-structured.",
            ]
        );
    }

    #[test]
    fn test_short_synopsis_reads_as_too_brief() {
        let feedback = generate_feedback(&scores(70.0, 70.0, 70.0, 20.0), 0.05, 0.2);
        assert_eq!(
            feedback,
            ["The synopsis is too brief relative to the article length."]
        );
    }

    #[test]
    fn test_long_synopsis_reads_as_too_detailed() {
        let feedback = generate_feedback(&scores(70.0, 70.0, 70.0, 20.0), 0.5, 0.2);
        assert_eq!(
            feedback,
            ["The synopsis is too detailed for an effective summary."]
        );
    }

    #[test]
    fn test_four_qualifying_messages_truncate_to_three() {
        let feedback = generate_feedback(&scores(10.0, 10.0, 10.0, 10.0), 0.05, 0.2);

        assert_eq!(feedback.len(), 3);
        assert!(feedback[0].contains("misses key information"));
        assert!(feedback[1].contains("more aligned"));
        assert!(feedback[2].contains("simplifying sentence structure"));
    }

    #[test]
    fn test_mixed_bands_keep_metric_order() {
        let feedback = generate_feedback(&scores(90.0, 40.0, 70.0, 20.0), 0.5, 0.2);
        assert_eq!(feedback.len(), 3);
        assert!(feedback[0].contains("Excellent coverage"));
        assert!(feedback[1].contains("more aligned"));
        assert!(feedback[2].contains("too detailed"));
    }
}
