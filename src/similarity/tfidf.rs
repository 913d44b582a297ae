//! TF-IDF cosine similarity.
//!
//! Treats the two input spans as a two-document corpus: lowercase
//! alphanumeric tokens, English stopwords removed, term frequencies
//! weighted by smoothed inverse document frequency, cosine of the two
//! weighted vectors. Similarities land in `[0, 1]`; scores for related
//! prose run lower than embedding cosines, which is why this backend's
//! default coverage threshold is 0.3.

use std::collections::HashMap;

use super::error::OracleError;
use super::{OracleKind, SimilarityOracle};

/// Model-free similarity oracle over TF-IDF vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfidfOracle;

impl TfidfOracle {
    /// Creates the oracle.
    pub fn new() -> Self {
        Self
    }
}

impl SimilarityOracle for TfidfOracle {
    fn similarity(&self, a: &str, b: &str) -> Result<f32, OracleError> {
        Ok(tfidf_cosine(a, b))
    }

    fn kind(&self) -> OracleKind {
        OracleKind::Tfidf
    }
}

/// Cosine similarity of the TF-IDF vectors of `a` and `b`.
///
/// Either span tokenizing to nothing (empty, or stopwords only) yields 0.0
/// rather than an error; the engine treats it as "no measurable overlap".
fn tfidf_cosine(a: &str, b: &str) -> f32 {
    let tokens_a = tokenize(a);
    let tokens_b = tokenize(b);

    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let counts_a = term_counts(&tokens_a);
    let counts_b = term_counts(&tokens_b);

    let mut dot = 0.0f32;
    let mut norm_a_sq = 0.0f32;
    let mut norm_b_sq = 0.0f32;

    for (term, &tf_a) in &counts_a {
        let tf_b = counts_b.get(term).copied().unwrap_or(0.0);
        let weight = idf(if tf_b > 0.0 { 2.0 } else { 1.0 });
        let wa = tf_a * weight;
        norm_a_sq += wa * wa;
        if tf_b > 0.0 {
            dot += wa * tf_b * weight;
        }
    }

    for (term, &tf_b) in &counts_b {
        let shared = counts_a.contains_key(*term);
        let wb = tf_b * idf(if shared { 2.0 } else { 1.0 });
        norm_b_sq += wb * wb;
    }

    if norm_a_sq == 0.0 || norm_b_sq == 0.0 {
        return 0.0;
    }

    dot / (norm_a_sq.sqrt() * norm_b_sq.sqrt())
}

/// Smoothed inverse document frequency for a two-document corpus:
/// `ln((1 + n) / (1 + df)) + 1` with `n = 2`.
fn idf(df: f32) -> f32 {
    (3.0 / (1.0 + df)).ln() + 1.0
}

fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() >= 2 && !is_stopword(w))
        .map(String::from)
        .collect()
}

fn term_counts(tokens: &[String]) -> HashMap<&str, f32> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0.0) += 1.0;
    }
    counts
}

fn is_stopword(word: &str) -> bool {
    const STOP_WORDS: &[&str] = &[
        "the", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do",
        "does", "did", "will", "would", "could", "should", "may", "might", "must", "shall", "can",
        "need", "ought", "used", "to", "of", "in", "for", "on", "with", "at", "by", "from", "as",
        "into", "through", "during", "before", "after", "above", "below", "between", "under",
        "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
        "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own",
        "same", "so", "than", "too", "very", "just", "and", "but", "if", "or", "because", "until",
        "while", "what", "which", "who", "whom", "this", "that", "these", "those", "am", "it",
        "its", "an", "they", "them", "their", "we", "our", "you", "your", "he", "she", "his",
        "her",
    ];
    STOP_WORDS.contains(&word)
}
