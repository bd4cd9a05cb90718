//! Base64 encoder/decoder

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::ToolError;

/// Standard Base64 of the UTF-8 text. Blank input gives empty output.
pub fn encode(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    STANDARD.encode(text.as_bytes())
}

/// Decode standard Base64 to UTF-8 text, ignoring whitespace in the input
pub fn decode(encoded: &str) -> Result<String, ToolError> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Ok(String::new());
    }

    let bytes = STANDARD.decode(compact).map_err(|_| ToolError::InvalidBase64)?;
    String::from_utf8(bytes).map_err(|_| ToolError::InvalidBase64)
}
