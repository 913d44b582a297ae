//! Shared state for gateway handlers.

use std::sync::Arc;

use crate::scoring::SynopsisScorer;
use crate::segment::SentenceSplit;

/// State cloned into every gateway handler.
///
/// The scorer and splitter are shared across requests; cloning the state is
/// an `Arc` bump plus an optional token copy.
#[derive(Clone)]
pub struct HandlerState {
    /// Evaluation engine answering `/v1/score`.
    pub scorer: Arc<SynopsisScorer>,
    /// Splitter driving the anonymization pass.
    pub splitter: Arc<dyn SentenceSplit>,
    /// Bearer token required on the score route, when gating is enabled.
    pub access_token: Option<String>,
}

impl HandlerState {
    pub fn new(
        scorer: Arc<SynopsisScorer>,
        splitter: Arc<dyn SentenceSplit>,
        access_token: Option<String>,
    ) -> Self {
        Self {
            scorer,
            splitter,
            access_token,
        }
    }
}
