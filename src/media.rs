//! Image payload helpers for the model client boundary.
//!
//! The core never interprets pixels: it only splits data URIs from the
//! caller's image pipeline into the `(mime type, base64)` pair the model API
//! expects, and encodes raw bytes when the caller has them instead.

use base64::Engine as _;

use crate::analysis::AnalysisError;

/// An image ready to attach to a model request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data_base64: String,
}

impl ImagePayload {
    /// Encode raw image bytes with an explicit MIME type.
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Self {
        Self {
            mime_type: mime_type.to_string(),
            data_base64: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    /// Split a `data:<mime>;base64,<payload>` URI.
    pub fn from_data_uri(uri: &str) -> Result<Self, AnalysisError> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| AnalysisError::Media("not a data URI".into()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| AnalysisError::Media("data URI has no payload".into()))?;

        let mut header_parts = header.split(';');
        let mime_type = header_parts.next().unwrap_or_default();
        if mime_type.is_empty() {
            return Err(AnalysisError::Media("data URI has no MIME type".into()));
        }
        if !header_parts.any(|p| p == "base64") {
            return Err(AnalysisError::Media("data URI is not base64-encoded".into()));
        }

        Ok(Self {
            mime_type: mime_type.to_string(),
            data_base64: payload.to_string(),
        })
    }

    /// Decode the payload back to raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>, AnalysisError> {
        base64::engine::general_purpose::STANDARD
            .decode(&self.data_base64)
            .map_err(|e| AnalysisError::Media(format!("invalid base64 payload: {e}")))
    }
}
