use docrec_core::ResultState;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::ikad::{IkadRecognizer, IkadRecognizerResult};
use crate::recognizer::{Recognizer, RecognizerResult, RecognizerType};

#[derive(Debug, Error)]
pub enum BindingError {
    #[error("Unknown recognizer type: '{0}'")]
    UnknownRecognizer(String),
    #[error("Malformed {recognizer} result: {source}")]
    MalformedResult {
        recognizer: RecognizerType,
        source: serde_json::Error,
    },
    #[error("Failed to serialize recognizer settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Settings for one recognizer, tagged with its `recognizerType` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "recognizerType")]
pub enum RecognizerSettings {
    #[serde(rename = "IkadRecognizer")]
    Ikad(IkadRecognizer),
}

impl RecognizerSettings {
    pub fn recognizer_type(&self) -> RecognizerType {
        match self {
            RecognizerSettings::Ikad(_) => IkadRecognizer::TYPE,
        }
    }

    /// Field-by-field settings bag handed to the engine.
    pub fn to_native(&self) -> Result<Value, BindingError> {
        Ok(serde_json::to_value(self)?)
    }
}

impl From<IkadRecognizer> for RecognizerSettings {
    fn from(r: IkadRecognizer) -> Self {
        RecognizerSettings::Ikad(r)
    }
}

/// Raw output of one recognizer as produced by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeResult {
    pub recognizer_type: String,
    pub fields: Value,
}

impl NativeResult {
    pub fn new(recognizer_type: impl Into<String>, fields: Value) -> Self {
        Self { recognizer_type: recognizer_type.into(), fields }
    }
}

/// A typed recognizer result, one variant per supported document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "recognizerType")]
pub enum RecognitionResult {
    #[serde(rename = "IkadRecognizer")]
    Ikad(IkadRecognizerResult),
}

impl RecognitionResult {
    pub fn recognizer_type(&self) -> RecognizerType {
        match self {
            RecognitionResult::Ikad(_) => IkadRecognizer::TYPE,
        }
    }

    pub fn as_ikad(&self) -> Option<&IkadRecognizerResult> {
        match self {
            RecognitionResult::Ikad(r) => Some(r),
        }
    }
}

impl RecognizerResult for RecognitionResult {
    fn result_state(&self) -> ResultState {
        match self {
            RecognitionResult::Ikad(r) => r.result_state(),
        }
    }
}

/// Map an engine result to its typed form by its discriminator.
pub fn result_from_native(native: &NativeResult) -> Result<RecognitionResult, BindingError> {
    let recognizer_type: RecognizerType = native
        .recognizer_type
        .parse()
        .map_err(|_| BindingError::UnknownRecognizer(native.recognizer_type.clone()))?;

    match recognizer_type {
        RecognizerType::Ikad => decode::<IkadRecognizer>(&native.fields).map(RecognitionResult::Ikad),
    }
}

fn decode<R: Recognizer>(fields: &Value) -> Result<R::Result, BindingError> {
    <R::Result as Deserialize>::deserialize(fields).map_err(|source| BindingError::MalformedResult {
        recognizer: R::TYPE,
        source,
    })
}
