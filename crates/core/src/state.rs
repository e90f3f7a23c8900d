use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a recognition pass, shared by every recognizer result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "RawResultState")]
pub enum ResultState {
    /// Nothing was recognized.
    Empty,
    /// Some fields were recognized, but not all that were requested.
    Uncertain,
    /// Recognition completed.
    Valid,
}

impl ResultState {
    /// Numeric code used by the engine.
    pub fn code(self) -> u8 {
        match self {
            ResultState::Empty => 1,
            ResultState::Uncertain => 2,
            ResultState::Valid => 3,
        }
    }

    /// Inverse of [`ResultState::code`].
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(ResultState::Empty),
            2 => Some(ResultState::Uncertain),
            3 => Some(ResultState::Valid),
            _ => None,
        }
    }
}

impl fmt::Display for ResultState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultState::Empty => write!(f, "empty"),
            ResultState::Uncertain => write!(f, "uncertain"),
            ResultState::Valid => write!(f, "valid"),
        }
    }
}

impl std::str::FromStr for ResultState {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "empty" | "failure" => Ok(ResultState::Empty),
            "uncertain" | "partial" => Ok(ResultState::Uncertain),
            "valid" | "success" => Ok(ResultState::Valid),
            other => Err(format!("Unknown result state: '{other}'")),
        }
    }
}

/// Result state in wire form: the engine sends either its numeric code or a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawResultState {
    Code(u8),
    Name(String),
}

impl TryFrom<RawResultState> for ResultState {
    type Error = String;
    fn try_from(raw: RawResultState) -> Result<Self, Self::Error> {
        match raw {
            RawResultState::Code(code) => {
                ResultState::from_code(code).ok_or_else(|| format!("Unknown result state code: {code}"))
            }
            RawResultState::Name(name) => name.parse(),
        }
    }
}

/// A result state together with the exact form the engine sent it in.
///
/// Serializes back to that same code or spelling, so a result written out
/// again carries the engine's tag untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawResultState", into = "RawResultState")]
pub struct ResultStateTag {
    state: ResultState,
    raw: RawResultState,
}

impl ResultStateTag {
    /// The parsed state.
    pub fn state(&self) -> ResultState {
        self.state
    }

    /// The tag as the engine wrote it: a decimal code or a name.
    pub fn raw(&self) -> String {
        match &self.raw {
            RawResultState::Code(code) => code.to_string(),
            RawResultState::Name(name) => name.clone(),
        }
    }
}

impl From<ResultState> for ResultStateTag {
    fn from(state: ResultState) -> Self {
        ResultStateTag { state, raw: RawResultState::Name(state.to_string()) }
    }
}

impl TryFrom<RawResultState> for ResultStateTag {
    type Error = String;
    fn try_from(raw: RawResultState) -> Result<Self, Self::Error> {
        let state = ResultState::try_from(raw.clone())?;
        Ok(ResultStateTag { state, raw })
    }
}

impl From<ResultStateTag> for RawResultState {
    fn from(tag: ResultStateTag) -> Self {
        tag.raw
    }
}

impl PartialEq<ResultState> for ResultStateTag {
    fn eq(&self, other: &ResultState) -> bool {
        self.state == *other
    }
}
