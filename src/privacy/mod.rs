//! Text anonymization.
//!
//! Pattern-based redaction of dates, emails, phone numbers, URLs, and a
//! crude capitalized-word heuristic for personal names. Not NER-grade:
//! sentence-initial words are always kept, so names opening a sentence
//! pass through. Output is whitespace-normalized.

use std::sync::LazyLock;

use regex::Regex;

use crate::segment::SentenceSplit;

static NUMERIC_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,2}/\d{1,2}/\d{2,4}\b").expect("valid regex"));

static MONTH_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]* \d{1,2},? \d{4}\b")
        .expect("valid regex")
});

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid regex")
});

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").expect("valid regex"));

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid regex"));

/// Lowercased words that are routinely capitalized mid-sentence and must
/// not read as names.
const COMMON_CAPITALIZED: &[&str] = &[
    "i", "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "january",
    "february", "march", "april", "may", "june", "july", "august", "september", "october",
    "november", "december",
];

/// Replaces identifying spans with `[DATE]`, `[EMAIL]`, `[PHONE]`, `[URL]`
/// and `[NAME]` placeholders.
pub fn anonymize(text: &str, splitter: &dyn SentenceSplit) -> String {
    let text = NUMERIC_DATE.replace_all(text, "[DATE]");
    let text = MONTH_DATE.replace_all(&text, "[DATE]");
    let text = EMAIL.replace_all(&text, "[EMAIL]");
    let text = PHONE.replace_all(&text, "[PHONE]");
    let text = URL.replace_all(&text, "[URL]");

    mask_names(&text, splitter)
}

/// Masks capitalized words that are not sentence-initial and not in the
/// common-word allowlist. Tokens are replaced whole, attached punctuation
/// included.
fn mask_names(text: &str, splitter: &dyn SentenceSplit) -> String {
    let sentences = splitter.split(text);
    let mut masked = Vec::with_capacity(sentences.len());

    for sentence in &sentences {
        let mut tokens = sentence.split_whitespace();
        let Some(first) = tokens.next() else {
            continue;
        };

        let mut rebuilt = vec![first.to_string()];
        for token in tokens {
            if is_maskable_name(token) {
                rebuilt.push("[NAME]".to_string());
            } else {
                rebuilt.push(token.to_string());
            }
        }

        masked.push(rebuilt.join(" "));
    }

    masked.join(" ")
}

fn is_maskable_name(token: &str) -> bool {
    let starts_upper = token.chars().next().is_some_and(char::is_uppercase);
    starts_upper && !COMMON_CAPITALIZED.contains(&token.to_lowercase().as_str())
}
