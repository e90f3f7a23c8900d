use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::registry::{BindingError, RecognizerSettings};

pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

fn default_timeout() -> u32 {
    DEFAULT_TIMEOUT_MS
}

/// Ordered set of recognizers run together over the same input.
///
/// The engine reports results in the same order as `recognizers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct RecognizerCollection {
    pub recognizers: Vec<RecognizerSettings>,
    /// Keep scanning after the first recognizer succeeds.
    #[serde(default)]
    pub allow_multiple_results: bool,
    /// How long the engine may keep trying before giving up with empty results.
    #[serde(default = "default_timeout")]
    pub milliseconds_before_timeout: u32,
}

impl RecognizerCollection {
    pub fn new(recognizers: Vec<RecognizerSettings>) -> Self {
        Self {
            recognizers,
            allow_multiple_results: false,
            milliseconds_before_timeout: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn single(recognizer: impl Into<RecognizerSettings>) -> Self {
        Self::new(vec![recognizer.into()])
    }

    pub fn is_empty(&self) -> bool {
        self.recognizers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.recognizers.len()
    }

    /// The full settings document handed to the engine.
    pub fn to_native(&self) -> Result<Value, BindingError> {
        Ok(serde_json::to_value(self)?)
    }
}
