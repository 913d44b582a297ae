//! Sentence segmentation.
//!
//! The engine consumes sentence splitting as an injected capability so the
//! chunker and the clarity metric stay independent of any particular
//! segmentation scheme. [`RuleSplitter`] is the shipped implementation.

/// Splits raw text into an ordered sequence of sentences.
///
/// Implementations must return trimmed, non-empty sentences in original
/// order with no overlap; the chunker relies on the output being a faithful
/// partition of the input's sentence content.
pub trait SentenceSplit: Send + Sync {
    /// Splits `text` into ordered, non-empty sentence strings.
    fn split(&self, text: &str) -> Vec<String>;
}

/// Punctuation-driven sentence splitter.
///
/// A sentence ends at `.`, `!` or `?` when followed by whitespace or end of
/// input; closing quotes and brackets directly after the terminator stay
/// attached to the sentence they close. Interior periods ("3.5 percent")
/// do not split because no whitespace follows them. Trailing text without
/// a terminator becomes a final sentence of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleSplitter;

impl RuleSplitter {
    /// Creates a splitter.
    pub fn new() -> Self {
        Self
    }
}

impl SentenceSplit for RuleSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            current.push(ch);

            if matches!(ch, '.' | '!' | '?') {
                while let Some(&next) = chars.peek() {
                    if matches!(next, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}') {
                        current.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }

                if chars.peek().is_none_or(|c| c.is_whitespace()) {
                    flush_sentence(&mut sentences, &mut current);
                }
            }
        }

        flush_sentence(&mut sentences, &mut current);
        sentences
    }
}

fn flush_sentence(sentences: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}
