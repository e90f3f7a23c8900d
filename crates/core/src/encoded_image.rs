use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::DynamicImage;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodedImageError {
    #[error("Invalid base64 image payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// An encoded image (JPEG / PNG) returned by the engine.
///
/// This is a plain value buffer, not a handle into the engine. On the wire it
/// travels as a standard base64 string.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedImage(Vec<u8>);

impl EncodedImage {
    /// Wrap already-encoded image bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        EncodedImage(bytes.into())
    }

    /// Decode the base64 wire form. Surrounding whitespace is ignored.
    pub fn from_base64(encoded: &str) -> Result<Self, EncodedImageError> {
        Ok(EncodedImage(STANDARD.decode(encoded.trim())?))
    }

    /// Encode as standard base64 with padding.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    /// The encoded bytes (JPEG / PNG), not pixels.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Size of the encoded buffer in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode the buffer into pixels.
    pub fn decode(&self) -> Result<DynamicImage, EncodedImageError> {
        Ok(image::load_from_memory(&self.0)?)
    }

    /// Width and height in pixels.
    pub fn dimensions(&self) -> Result<(u32, u32), EncodedImageError> {
        let img = self.decode()?;
        Ok((img.width(), img.height()))
    }

    /// Lowercase hex SHA-256 of the encoded bytes (64 chars).
    pub fn sha256_hex(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(&self.0);
        let hash: [u8; 32] = hasher.finalize().into();
        hash.iter().map(|b| format!("{b:02x}")).collect()
    }
}

// Prints length and digest only.
impl fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedImage")
            .field("len", &self.0.len())
            .field("sha256", &&self.sha256_hex()[..12])
            .finish()
    }
}

impl Serialize for EncodedImage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for EncodedImage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        EncodedImage::from_base64(&encoded).map_err(serde::de::Error::custom)
    }
}
