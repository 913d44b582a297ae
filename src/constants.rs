//! Cross-cutting, shared constants.
//!
//! The scoring formula is defined entirely by the values here: sub-score
//! weights, the feedback bands, and the per-backend coverage thresholds.
//! Prefer referencing these over re-declaring literals so the engine, the
//! gateway, and the tests cannot drift apart.

/// Number of chunks the chunker aims to split an article into.
pub const DEFAULT_TARGET_CHUNKS: usize = 10;

/// Coverage threshold tuned for the TF-IDF oracle's similarity distribution.
pub const TFIDF_COVERAGE_THRESHOLD: f32 = 0.3;

/// Coverage threshold tuned for transformer-embedding cosine similarities.
pub const EMBEDDING_COVERAGE_THRESHOLD: f32 = 0.5;

/// Ideal synopsis length as a fraction of article word count.
pub const IDEAL_LENGTH_RATIO: f64 = 0.2;

/// Weight of the content-coverage sub-score in the final score.
pub const WEIGHT_COVERAGE: f64 = 0.50;
/// Weight of the coherence sub-score in the final score.
pub const WEIGHT_COHERENCE: f64 = 0.25;
/// Weight of the clarity sub-score in the final score.
pub const WEIGHT_CLARITY: f64 = 0.15;
/// Weight of the length-ratio sub-score in the final score.
pub const WEIGHT_LENGTH_RATIO: f64 = 0.10;

/// Lower edge of the ideal words-per-sentence band.
pub const CLARITY_IDEAL_MIN: f64 = 10.0;
/// Upper edge of the ideal band; averages above it accrue clarity penalty.
pub const CLARITY_IDEAL_MAX: f64 = 25.0;
/// Mean sentence length is capped here before the clarity penalty ramp.
pub const CLARITY_LENGTH_CAP: f64 = 40.0;
/// Width of the clarity penalty ramp (cap minus ideal max).
pub const CLARITY_RAMP: f64 = CLARITY_LENGTH_CAP - CLARITY_IDEAL_MAX;

/// A sub-score strictly below this earns a "needs work" feedback line.
pub const FEEDBACK_LOW_BAND: f64 = 60.0;
/// A sub-score strictly above this earns a "well done" feedback line.
pub const FEEDBACK_HIGH_BAND: f64 = 85.0;
/// Reports carry at most this many feedback lines.
pub const MAX_FEEDBACK_LINES: usize = 3;

/// Response header naming the gateway outcome class.
pub const SYNOSCORE_STATUS_HEADER: &str = "x-synoscore-status";
/// Status header value on liveness probes.
pub const SYNOSCORE_STATUS_HEALTHY: &str = "healthy";
/// Status header value on readiness probes and ready components.
pub const SYNOSCORE_STATUS_READY: &str = "ready";
/// Status header value on successful evaluations.
pub const SYNOSCORE_STATUS_SCORED: &str = "scored";
/// Status header value when a request or component fails.
pub const SYNOSCORE_STATUS_ERROR: &str = "error";

/// Default embedding dimension (MiniLM-class sentence encoders).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Default max tokens fed to the embedding model per span.
pub const DEFAULT_MAX_SEQ_LEN: usize = 512;

/// Default capacity of the embedding memo cache (entries).
pub const DEFAULT_EMBED_CACHE_CAPACITY: u64 = 4096;
