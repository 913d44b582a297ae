//! Synopsis quality scoring.
//!
//! [`SynopsisScorer`] chunks an article, asks the injected similarity
//! oracle how well the synopsis matches each chunk, and folds the results
//! together with clarity and length measurements into a weighted
//! [`ScoreReport`] with qualitative feedback.

mod chunker;
mod config;
mod error;
mod feedback;
mod report;
mod scorer;


pub use chunker::chunk;
pub use config::ScoringConfig;
pub use error::ScoreError;
pub use report::{DetailedScores, ScoreReport};
pub use scorer::SynopsisScorer;
