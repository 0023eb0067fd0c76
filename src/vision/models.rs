// Vision models and types
// Author: kelexine (https://github.com/kelexine)

use base64::Engine;

/// MIME type assumed when the client sends bare base64.
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// Raw image bytes together with their MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl DecodedImage {
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }

    /// Re-encode the bytes for Gemini's `inlineData` part.
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.data)
    }
}

/// Collapse the `image/image/<subtype>` prefix some uploaders produce.
///
/// Compatibility behavior for clients that prepend `image/` to a value which
/// already carries it. Revisit once those clients are fixed.
pub fn normalize_mime_type(mime: &str) -> String {
    match mime.strip_prefix("image/image/") {
        Some(subtype) => format!("image/{}", subtype),
        None => mime.to_string(),
    }
}
