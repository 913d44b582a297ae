//! BLAKE3 helpers for content hashing.
//!
//! Hashes here are used for indexing and log correlation only, never for
//! authentication: the embedding memo keys entries by [`hash_text`], and the
//! gateway logs a [`request_digest`] so one evaluation can be traced across
//! log lines without retaining the texts themselves.

use blake3::Hasher;

/// Hashes a text span to a 32-byte key.
#[inline]
pub fn hash_text(text: &str) -> [u8; 32] {
    *blake3::hash(text.as_bytes()).as_bytes()
}

/// Computes a short hex digest over an article/synopsis pair.
///
/// A separator byte keeps `("ab", "c")` and `("a", "bc")` distinct.
pub fn request_digest(article: &str, synopsis: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(article.as_bytes());
    hasher.update(b"|");
    hasher.update(synopsis.as_bytes());

    let hash = hasher.finalize();
    hash.to_hex()[..16].to_string()
}
