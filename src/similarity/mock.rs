//! Test doubles for the similarity oracle.
//!
//! Compiled for unit tests and behind the `mock` feature so integration
//! tests and downstream consumers can drive the engine without a model
//! or a tokenizer on disk.

use std::collections::VecDeque;

use parking_lot::Mutex;

use super::error::OracleError;
use super::{OracleKind, SimilarityOracle};

/// Oracle that returns the same similarity for every pair.
#[derive(Debug, Clone, Copy)]
pub struct ConstOracle {
    value: f32,
}

impl ConstOracle {
    pub fn new(value: f32) -> Self {
        Self { value }
    }
}

impl SimilarityOracle for ConstOracle {
    fn similarity(&self, _a: &str, _b: &str) -> Result<f32, OracleError> {
        Ok(self.value)
    }

    fn kind(&self) -> OracleKind {
        OracleKind::Tfidf
    }
}

/// Oracle that replays a fixed script of similarities in call order.
///
/// Errors once the script is exhausted, which doubles as a guard against
/// tests making more oracle calls than they expect.
pub struct ScriptedOracle {
    script: Mutex<VecDeque<f32>>,
}

impl ScriptedOracle {
    pub fn new(values: impl IntoIterator<Item = f32>) -> Self {
        Self {
            script: Mutex::new(values.into_iter().collect()),
        }
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.lock().len()
    }
}

impl SimilarityOracle for ScriptedOracle {
    fn similarity(&self, _a: &str, _b: &str) -> Result<f32, OracleError> {
        self.script
            .lock()
            .pop_front()
            .ok_or_else(|| OracleError::InferenceFailed {
                reason: "similarity script exhausted".to_string(),
            })
    }

    fn kind(&self) -> OracleKind {
        OracleKind::Tfidf
    }
}

/// Oracle that fails every call, for exercising failure propagation.
#[derive(Debug, Clone)]
pub struct FailingOracle {
    reason: String,
}

impl FailingOracle {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for FailingOracle {
    fn default() -> Self {
        Self::new("mock inference failure")
    }
}

impl SimilarityOracle for FailingOracle {
    fn similarity(&self, _a: &str, _b: &str) -> Result<f32, OracleError> {
        Err(OracleError::InferenceFailed {
            reason: self.reason.clone(),
        })
    }

    fn kind(&self) -> OracleKind {
        OracleKind::Tfidf
    }
}
