//! End-to-end evaluation tests through the public library API.

mod common;

use std::sync::Arc;

use common::fixtures::{GOOD_SYNOPSIS, SAMPLE_ARTICLE, UNRELATED_SYNOPSIS, tfidf_scorer};
use synoscore::scoring::{ScoringConfig, SynopsisScorer};
use synoscore::segment::{RuleSplitter, SentenceSplit};
use synoscore::similarity::{EmbedderConfig, EmbeddingOracle, OracleKind, SimilarityOracle};
use synoscore::{anonymize, chunk, extract_text};

#[test]
fn test_related_synopsis_outscores_unrelated() {
    let scorer = tfidf_scorer(ScoringConfig::default());

    let related = scorer
        .evaluate(SAMPLE_ARTICLE, GOOD_SYNOPSIS)
        .expect("related evaluation succeeds");
    let unrelated = scorer
        .evaluate(SAMPLE_ARTICLE, UNRELATED_SYNOPSIS)
        .expect("unrelated evaluation succeeds");

    assert!(
        related.final_score > unrelated.final_score,
        "related {} should beat unrelated {}",
        related.final_score,
        unrelated.final_score
    );
}

#[test]
fn test_report_invariants() {
    let report = tfidf_scorer(ScoringConfig::default())
        .evaluate(SAMPLE_ARTICLE, GOOD_SYNOPSIS)
        .expect("evaluation succeeds");

    let values = [
        report.final_score,
        report.detailed_scores.content_coverage,
        report.detailed_scores.coherence,
        report.detailed_scores.clarity,
        report.detailed_scores.length_ratio,
    ];
    for value in values {
        assert!((0.0..=100.0).contains(&value), "score {value} out of range");
        // Reported scores carry exactly one decimal place.
        assert!(
            (value * 10.0 - (value * 10.0).round()).abs() < 1e-6,
            "score {value} not rounded to one decimal"
        );
    }

    assert!(report.feedback.len() <= 3);
}

#[test]
fn test_evaluation_is_deterministic_across_engines() {
    let first = tfidf_scorer(ScoringConfig::default())
        .evaluate(SAMPLE_ARTICLE, GOOD_SYNOPSIS)
        .expect("first evaluation succeeds");
    let second = tfidf_scorer(ScoringConfig::default())
        .evaluate(SAMPLE_ARTICLE, GOOD_SYNOPSIS)
        .expect("second evaluation succeeds");

    assert_eq!(first, second);
}

#[test]
fn test_raising_threshold_never_raises_coverage() {
    let relaxed = tfidf_scorer(ScoringConfig::default().with_coverage_threshold(0.05))
        .evaluate(SAMPLE_ARTICLE, GOOD_SYNOPSIS)
        .expect("relaxed evaluation succeeds");
    let strict = tfidf_scorer(ScoringConfig::default().with_coverage_threshold(0.95))
        .evaluate(SAMPLE_ARTICLE, GOOD_SYNOPSIS)
        .expect("strict evaluation succeeds");

    assert!(
        strict.detailed_scores.content_coverage <= relaxed.detailed_scores.content_coverage
    );
    // Prose chunks never reach near-identity similarity with a synopsis.
    assert_eq!(strict.detailed_scores.content_coverage, 0.0);
}

#[test]
fn test_unrelated_synopsis_draws_coverage_and_coherence_feedback() {
    let report = tfidf_scorer(ScoringConfig::default())
        .evaluate(SAMPLE_ARTICLE, UNRELATED_SYNOPSIS)
        .expect("evaluation succeeds");

    assert!(report.feedback.iter().any(|line| {
        line == "The synopsis misses key information from the article. \
                 Consider including more essential points."
    }));
    assert!(report.feedback.iter().any(|line| {
        line == "The synopsis could be more aligned with the article's focus and structure."
    }));
}

#[test]
fn test_anonymized_article_still_evaluates() {
    let splitter = RuleSplitter::new();
    let masked = anonymize(SAMPLE_ARTICLE, &splitter);
    assert_eq!(masked, SAMPLE_ARTICLE, "fixture should be mask-transparent");

    let report = tfidf_scorer(ScoringConfig::default())
        .evaluate(&masked, GOOD_SYNOPSIS)
        .expect("evaluation succeeds");
    assert!((0.0..=100.0).contains(&report.final_score));
}

#[test]
fn test_file_to_report_pipeline() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let article_path = dir.path().join("article.txt");
    let synopsis_path = dir.path().join("synopsis.txt");
    std::fs::write(&article_path, SAMPLE_ARTICLE).expect("write article");
    std::fs::write(&synopsis_path, GOOD_SYNOPSIS).expect("write synopsis");

    let article = extract_text(&article_path).expect("extract article");
    let synopsis = extract_text(&synopsis_path).expect("extract synopsis");

    let report = tfidf_scorer(ScoringConfig::default())
        .evaluate(&article, &synopsis)
        .expect("evaluation succeeds");
    assert!(report.final_score > 0.0);
}

#[test]
fn test_report_serializes_with_stable_field_names() {
    let report = tfidf_scorer(ScoringConfig::default())
        .evaluate(SAMPLE_ARTICLE, GOOD_SYNOPSIS)
        .expect("evaluation succeeds");

    let value = serde_json::to_value(&report).expect("report serializes");
    assert!(value.get("final_score").is_some());
    assert!(value["feedback"].is_array());

    let detailed = value.get("detailed_scores").expect("detailed_scores present");
    for key in ["content_coverage", "coherence", "clarity", "length_ratio"] {
        assert!(detailed.get(key).is_some(), "missing sub-score {key}");
    }
}

#[test]
fn test_chunker_partitions_article_sentences() {
    let sentences = RuleSplitter::new().split(SAMPLE_ARTICLE);
    assert!(sentences.len() >= 10);

    let chunks = chunk(&sentences, 10);
    assert!(!chunks.is_empty());
    assert_eq!(chunks.join(" "), sentences.join(" "));
}

#[test]
fn test_embedding_stub_oracle_scores_end_to_end() {
    let oracle = EmbeddingOracle::load(EmbedderConfig::stub()).expect("stub oracle loads");
    assert_eq!(oracle.kind(), OracleKind::EmbeddingStub);

    let scorer = SynopsisScorer::new(
        Arc::new(oracle),
        Arc::new(RuleSplitter::new()),
        ScoringConfig::for_oracle(OracleKind::EmbeddingStub),
    )
    .expect("stub scoring config is valid");

    let report = scorer
        .evaluate(SAMPLE_ARTICLE, GOOD_SYNOPSIS)
        .expect("evaluation succeeds");
    assert!((0.0..=100.0).contains(&report.final_score));
    assert!(report.feedback.len() <= 3);
}
