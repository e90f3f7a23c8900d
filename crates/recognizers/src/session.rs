use serde_json::Value;
use std::path::Path;
use thiserror::Error;

use crate::collection::RecognizerCollection;
use crate::engine::{EngineError, RecognitionEngine};
use crate::recognizer::{RecognizerResult, RecognizerType};
use crate::registry::{result_from_native, BindingError, RecognitionResult};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Recognizer collection is empty")]
    EmptyCollection,
    #[error("Recognition failed: {0}")]
    Engine(#[from] EngineError),
    #[error("Result conversion failed: {0}")]
    Binding(#[from] BindingError),
    #[error("Engine returned {actual} results for {expected} recognizers")]
    ResultCountMismatch { expected: usize, actual: usize },
    #[error("Result {index} came from {actual}, expected {expected}")]
    UnexpectedRecognizer {
        index: usize,
        expected: RecognizerType,
        actual: RecognizerType,
    },
}

/// One recognition session: the settings are serialized once up front and
/// stay fixed for every scan run through the session.
pub struct RecognitionSession<E: RecognitionEngine> {
    engine: E,
    settings: Value,
    expected: Vec<RecognizerType>,
}

impl<E: RecognitionEngine> RecognitionSession<E> {
    pub fn new(engine: E, collection: &RecognizerCollection) -> Result<Self, SessionError> {
        if collection.is_empty() {
            return Err(SessionError::EmptyCollection);
        }
        let settings = collection.to_native()?;
        tracing::debug!("Recognizer settings: {settings}");
        Ok(Self {
            engine,
            settings,
            expected: collection.recognizers.iter().map(|r| r.recognizer_type()).collect(),
        })
    }

    /// Settings document sent to the engine on every scan.
    pub fn settings(&self) -> &Value {
        &self.settings
    }

    /// Scan an image file on disk.
    pub async fn scan_file(&self, path: &Path) -> Result<Vec<RecognitionResult>, SessionError> {
        let bytes = tokio::fs::read(path).await?;
        self.scan(&bytes)
    }

    /// Run the engine over encoded image bytes and convert every raw result.
    /// Results come back in recognizer order.
    pub fn scan(&self, image: &[u8]) -> Result<Vec<RecognitionResult>, SessionError> {
        let natives = self.engine.recognize(&self.settings, image)?;

        if natives.len() != self.expected.len() {
            return Err(SessionError::ResultCountMismatch {
                expected: self.expected.len(),
                actual: natives.len(),
            });
        }

        let mut results = Vec::with_capacity(natives.len());
        for (index, (native, expected)) in natives.iter().zip(&self.expected).enumerate() {
            let result = result_from_native(native).inspect_err(|e| {
                tracing::warn!("Discarding scan, result {index} did not convert: {e}");
            })?;

            let actual = result.recognizer_type();
            if actual != *expected {
                return Err(SessionError::UnexpectedRecognizer { index, expected: *expected, actual });
            }

            tracing::info!("{actual} finished with state {}", result.result_state());
            results.push(result);
        }

        Ok(results)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{MockEngine, UnavailableEngine};
    use crate::ikad::IkadRecognizer;
    use crate::registry::NativeResult;
    use docrec_core::{EncodedImage, ResultState};
    use image::{DynamicImage, GrayImage, ImageBuffer, Luma};
    use serde_json::json;
    use std::io::Cursor;

    fn tiny_png() -> Vec<u8> {
        let img: GrayImage = ImageBuffer::from_fn(4, 4, |_, _| Luma([200u8]));
        let mut buf = Vec::new();
        DynamicImage::ImageLuma8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    fn ikad_native(fields: Value) -> NativeResult {
        NativeResult::new("IkadRecognizer", fields)
    }

    #[test]
    fn scan_converts_results() {
        let face = EncodedImage::from_bytes(tiny_png()).to_base64();
        let engine = MockEngine::new(vec![ikad_native(json!({
            "resultState": "valid",
            "name": "ALI BIN ABU",
            "passportNumber": "A12345678",
            "faceImage": face
        }))]);
        let collection =
            RecognizerCollection::single(IkadRecognizer { return_face_image: true, ..Default::default() });
        let session = RecognitionSession::new(engine, &collection).unwrap();

        let results = session.scan(b"frame").unwrap();
        assert_eq!(results.len(), 1);
        let ikad = results[0].as_ikad().unwrap();
        assert_eq!(ikad.result_state(), ResultState::Valid);
        assert_eq!(ikad.passport_number.as_deref(), Some("A12345678"));
        assert_eq!(ikad.face_image.as_ref().unwrap().dimensions().unwrap(), (4, 4));
    }

    #[test]
    fn settings_are_fixed_at_construction() {
        let mut collection = RecognizerCollection::single(IkadRecognizer::default());
        let session = RecognitionSession::new(MockEngine::new(vec![]), &collection).unwrap();
        collection.milliseconds_before_timeout = 1;
        assert_eq!(session.settings()["millisecondsBeforeTimeout"], json!(10_000));
    }

    #[test]
    fn empty_collection_is_rejected() {
        let collection = RecognizerCollection::new(vec![]);
        assert!(matches!(
            RecognitionSession::new(MockEngine::new(vec![]), &collection),
            Err(SessionError::EmptyCollection)
        ));
    }

    #[test]
    fn result_count_must_match() {
        let engine = MockEngine::new(vec![
            ikad_native(json!({ "resultState": 3 })),
            ikad_native(json!({ "resultState": 1 })),
        ]);
        let session =
            RecognitionSession::new(engine, &RecognizerCollection::single(IkadRecognizer::default()))
                .unwrap();
        assert!(matches!(
            session.scan(b""),
            Err(SessionError::ResultCountMismatch { expected: 1, actual: 2 })
        ));
    }

    #[test]
    fn unknown_result_type_fails_the_scan() {
        let engine = MockEngine::new(vec![NativeResult::new("MysteryRecognizer", json!({}))]);
        let session =
            RecognitionSession::new(engine, &RecognizerCollection::single(IkadRecognizer::default()))
                .unwrap();
        assert!(matches!(
            session.scan(b""),
            Err(SessionError::Binding(BindingError::UnknownRecognizer(_)))
        ));
    }

    #[test]
    fn engine_errors_propagate() {
        let session = RecognitionSession::new(
            UnavailableEngine,
            &RecognizerCollection::single(IkadRecognizer::default()),
        )
        .unwrap();
        assert!(matches!(session.scan(b""), Err(SessionError::Engine(EngineError::NotAvailable))));
    }

    #[tokio::test]
    async fn scan_file_reads_image_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.png");
        std::fs::write(&path, tiny_png()).unwrap();

        let engine = MockEngine::new(vec![ikad_native(json!({ "resultState": "uncertain", "sector": "" }))]);
        let session =
            RecognitionSession::new(engine, &RecognizerCollection::single(IkadRecognizer::default()))
                .unwrap();

        let results = session.scan_file(&path).await.unwrap();
        assert_eq!(results[0].result_state(), ResultState::Uncertain);
        assert_eq!(results[0].as_ikad().unwrap().sector.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn scan_file_missing_path_is_io_error() {
        let session = RecognitionSession::new(
            MockEngine::new(vec![]),
            &RecognizerCollection::single(IkadRecognizer::default()),
        )
        .unwrap();
        let err = session.scan_file(Path::new("/nonexistent/card.jpg")).await.unwrap_err();
        assert!(matches!(err, SessionError::Io(_)));
    }
}
