//! One-line summaries of typed results for terminal output.

use docrec_core::{Date, EncodedImage};
use docrec_recognizers::{IkadRecognizerResult, RecognitionResult, RecognizerResult};

pub fn summary(result: &RecognitionResult) -> String {
    let fields = match result {
        RecognitionResult::Ikad(r) => ikad_fields(r),
    };
    let mut line = format!("{} [{}]", result.recognizer_type(), result.result_state());
    for (key, value) in fields {
        line.push_str(&format!(" {key}={value}"));
    }
    line
}

fn ikad_fields(r: &IkadRecognizerResult) -> Vec<(&'static str, String)> {
    let mut out = Vec::new();
    text(&mut out, "name", &r.name);
    text(&mut out, "passportNumber", &r.passport_number);
    text(&mut out, "nationality", &r.nationality);
    text(&mut out, "sex", &r.sex);
    date(&mut out, "dateOfBirth", r.date_of_birth);
    date(&mut out, "expiryDate", r.expiry_date);
    text(&mut out, "employer", &r.employer);
    text(&mut out, "sector", &r.sector);
    text(&mut out, "address", &r.address);
    text(&mut out, "facultyAddress", &r.faculty_address);
    image(&mut out, "faceImage", &r.face_image);
    image(&mut out, "fullDocumentImage", &r.full_document_image);
    out
}

fn text(out: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(v) = value {
        out.push((key, format!("{v:?}")));
    }
}

fn date(out: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<Date>) {
    if let Some(d) = value {
        let marker = if d.is_valid() { "" } else { "(invalid)" };
        out.push((key, format!("{d}{marker}")));
    }
}

// Images are reported by size and digest only.
fn image(out: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<EncodedImage>) {
    if let Some(img) = value {
        out.push((key, format!("{}B:{}", img.len(), &img.sha256_hex()[..12])));
    }
}
