use docrec_core::{Date, EncodedImage, ResultState, ResultStateTag};
use serde::{Deserialize, Serialize};

use crate::recognizer::{Recognizer, RecognizerResult, RecognizerType};

/// Settings for reading the Malaysian iKad (foreign worker identity card).
///
/// Every field can be overridden on its own; the engine rejects combinations
/// it cannot honour. Defaults extract every field but return no images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct IkadRecognizer {
    /// Whether the glare detector is enabled.
    pub detect_glare: bool,
    pub extract_address: bool,
    pub extract_employer: bool,
    pub extract_expiry_date: bool,
    pub extract_faculty_address: bool,
    pub extract_nationality: bool,
    pub extract_passport_number: bool,
    pub extract_sector: bool,
    pub extract_sex: bool,
    /// DPI of the returned full document image.
    pub full_document_image_dpi: u32,
    pub return_face_image: bool,
    pub return_full_document_image: bool,
}

impl Default for IkadRecognizer {
    fn default() -> Self {
        Self {
            detect_glare: true,
            extract_address: true,
            extract_employer: true,
            extract_expiry_date: true,
            extract_faculty_address: true,
            extract_nationality: true,
            extract_passport_number: true,
            extract_sector: true,
            extract_sex: true,
            full_document_image_dpi: 250,
            return_face_image: false,
            return_full_document_image: false,
        }
    }
}

impl Recognizer for IkadRecognizer {
    const TYPE: RecognizerType = RecognizerType::Ikad;
    type Result = IkadRecognizerResult;
}

/// Fields read from an iKad in one recognition pass.
///
/// Any field may be absent: either its extraction was switched off or the
/// engine could not read it. An empty string is kept as `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IkadRecognizerResult {
    /// State tag as the engine reported it.
    pub result_state: ResultStateTag,
    /// Personal address of the card owner.
    pub address: Option<String>,
    pub date_of_birth: Option<Date>,
    pub employer: Option<String>,
    pub expiry_date: Option<Date>,
    /// Only present when `return_face_image` was set.
    pub face_image: Option<EncodedImage>,
    pub faculty_address: Option<String>,
    /// Only present when `return_full_document_image` was set.
    pub full_document_image: Option<EncodedImage>,
    pub name: Option<String>,
    pub nationality: Option<String>,
    pub passport_number: Option<String>,
    pub sector: Option<String>,
    pub sex: Option<String>,
}

impl RecognizerResult for IkadRecognizerResult {
    fn result_state(&self) -> ResultState {
        self.result_state.state()
    }
}
