//! Loading recognizer collections from TOML.
//!
//! ```toml
//! allowMultipleResults = false
//! millisecondsBeforeTimeout = 15000
//!
//! [[recognizers]]
//! recognizerType = "IkadRecognizer"
//! returnFaceImage = true
//! ```
//!
//! Keys left out of a `[[recognizers]]` table keep their defaults.

use std::path::Path;
use thiserror::Error;

use crate::collection::RecognizerCollection;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid recognizer configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn parse_collection(text: &str) -> Result<RecognizerCollection, ConfigError> {
    let collection: RecognizerCollection = toml::from_str(text)?;
    if collection.is_empty() {
        tracing::warn!("Recognizer configuration lists no recognizers");
    }
    Ok(collection)
}

pub fn load_collection(path: &Path) -> Result<RecognizerCollection, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let collection = parse_collection(&text)?;
    tracing::debug!(
        "Loaded {} recognizer(s) from {}",
        collection.len(),
        path.display()
    );
    Ok(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ikad::IkadRecognizer;
    use crate::registry::RecognizerSettings;

    #[test]
    fn parses_overrides_and_defaults() {
        let c = parse_collection(
            r#"
            millisecondsBeforeTimeout = 15000

            [[recognizers]]
            recognizerType = "IkadRecognizer"
            returnFaceImage = true
            extractEmployer = false
            "#,
        )
        .unwrap();

        assert!(!c.allow_multiple_results);
        assert_eq!(c.milliseconds_before_timeout, 15_000);
        assert_eq!(
            c.recognizers,
            vec![RecognizerSettings::Ikad(IkadRecognizer {
                return_face_image: true,
                extract_employer: false,
                ..Default::default()
            })]
        );
    }

    #[test]
    fn unknown_recognizer_type_is_a_parse_error() {
        let err = parse_collection(
            r#"
            [[recognizers]]
            recognizerType = "BarcodeRecognizer"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn wrong_value_type_is_a_parse_error() {
        let err = parse_collection(
            r#"
            [[recognizers]]
            recognizerType = "IkadRecognizer"
            fullDocumentImageDpi = "high"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn misspelled_recognizer_key_is_a_parse_error() {
        let err = parse_collection(
            r#"
            [[recognizers]]
            recognizerType = "IkadRecognizer"
            returnFaceImag = true
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("returnFaceImag"));
    }

    #[test]
    fn misspelled_collection_key_is_a_parse_error() {
        let err = parse_collection(
            r#"
            allowMultipleResult = true

            [[recognizers]]
            recognizerType = "IkadRecognizer"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.toml");
        std::fs::write(&path, "[[recognizers]]\nrecognizerType = \"IkadRecognizer\"\n").unwrap();

        let c = load_collection(&path).unwrap();
        assert_eq!(c, RecognizerCollection::single(IkadRecognizer::default()));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_collection(Path::new("/nonexistent/scan.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/scan.toml"));
    }
}
