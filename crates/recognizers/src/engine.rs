use serde_json::Value;
use thiserror::Error;

use crate::registry::NativeResult;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Image decode error: {0}")]
    ImageDecode(String),
    #[error("Recognition engine error: {0}")]
    Engine(String),
    #[error("Recognition engine not available on this platform")]
    NotAvailable,
}

/// Abstraction over the native recognition engine.
/// Implementations receive the settings document produced by
/// [`RecognizerCollection::to_native`](crate::RecognizerCollection::to_native)
/// and the captured image, and return one raw result per recognizer.
pub trait RecognitionEngine: Send + Sync {
    fn recognize(&self, settings: &Value, image: &[u8]) -> Result<Vec<NativeResult>, EngineError>;
}

// ── Mock engine (always available, used for tests) ───────────────────────────

/// Returns pre-set native results regardless of input.
pub struct MockEngine {
    pub results: Vec<NativeResult>,
}

impl MockEngine {
    pub fn new(results: Vec<NativeResult>) -> Self {
        Self { results }
    }
}

impl RecognitionEngine for MockEngine {
    fn recognize(&self, _settings: &Value, _image: &[u8]) -> Result<Vec<NativeResult>, EngineError> {
        Ok(self.results.clone())
    }
}

/// Stand-in for platforms without a native engine build.
pub struct UnavailableEngine;

impl RecognitionEngine for UnavailableEngine {
    fn recognize(&self, _settings: &Value, _image: &[u8]) -> Result<Vec<NativeResult>, EngineError> {
        Err(EngineError::NotAvailable)
    }
}
