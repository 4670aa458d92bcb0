//! Binary/text transcoding helpers
//!
//! Pure conversions between byte sequences, base64 text, and UTF-8 strings.
//! The base64 form uses the standard alphabet with padding and contains no
//! whitespace, so sealed payloads can be embedded in JSON or any other
//! text-oriented channel unchanged.

use crate::error::{AssetSealError, ErrorCategory, ErrorKind, Result};
use base64::{Engine, engine::general_purpose::STANDARD};

/// Encode bytes as base64 text.
pub fn to_base64(body: &[u8]) -> String {
    STANDARD.encode(body)
}

/// Decode base64 text back to the original bytes.
pub fn from_base64(text: &str) -> Result<Vec<u8>> {
    STANDARD.decode(text).map_err(|e| {
        AssetSealError::with_kind_and_source(
            ErrorCategory::User,
            ErrorKind::Decoding,
            format!("base64 decoding failed: {}", e),
            e,
        )
    })
}

/// Decode bytes as UTF-8 text, rejecting invalid sequences.
///
/// The source error preserved here carries only the position of the invalid
/// sequence, never the bytes themselves.
pub fn to_utf8(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        AssetSealError::with_kind_and_source(
            ErrorCategory::User,
            ErrorKind::CharacterDecoding,
            "recovered bytes are not valid UTF-8",
            e.utf8_error(),
        )
    })
}

/// Decode bytes as UTF-8 text, substituting U+FFFD for invalid sequences.
///
/// Only for callers that explicitly prefer lossy output over an error;
/// [`to_utf8`] is the default.
pub fn to_utf8_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
