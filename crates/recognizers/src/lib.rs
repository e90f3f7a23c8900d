pub mod collection;
pub mod config;
pub mod engine;
pub mod ikad;
pub mod recognizer;
pub mod registry;
pub mod session;

pub use collection::RecognizerCollection;
pub use config::{load_collection, parse_collection, ConfigError};
pub use engine::{EngineError, MockEngine, RecognitionEngine, UnavailableEngine};
pub use ikad::{IkadRecognizer, IkadRecognizerResult};
pub use recognizer::{Recognizer, RecognizerResult, RecognizerType};
pub use registry::{result_from_native, BindingError, NativeResult, RecognitionResult, RecognizerSettings};
pub use session::{RecognitionSession, SessionError};
