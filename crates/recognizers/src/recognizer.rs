use docrec_core::ResultState;
use serde::de::DeserializeOwned;
use std::fmt;

/// Discriminator the engine uses to pick an extraction profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecognizerType {
    Ikad,
}

impl RecognizerType {
    pub fn tag(self) -> &'static str {
        match self {
            RecognizerType::Ikad => "IkadRecognizer",
        }
    }
}

impl fmt::Display for RecognizerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl std::str::FromStr for RecognizerType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IkadRecognizer" => Ok(RecognizerType::Ikad),
            other => Err(format!("Unknown recognizer type: '{other}'")),
        }
    }
}

/// Capability shared by every recognizer result.
pub trait RecognizerResult {
    fn result_state(&self) -> ResultState;

    fn is_valid(&self) -> bool {
        self.result_state() == ResultState::Valid
    }

    fn is_empty(&self) -> bool {
        self.result_state() == ResultState::Empty
    }
}

/// A recognizer configuration, tied at the type level to the result it yields.
pub trait Recognizer {
    const TYPE: RecognizerType;
    type Result: RecognizerResult + DeserializeOwned;
}
