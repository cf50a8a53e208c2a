//! Plain text and CSV extraction

use crate::error::{ToolError, ToolResult};
use std::fs;
use std::path::Path;

/// Read the whole file as text with best-effort decoding
pub fn extract_text(path: &Path) -> ToolResult<String> {
    let bytes = fs::read(path).map_err(|e| ToolError::file_read(e.to_string()))?;
    Ok(decode_lossy(&bytes))
}

/// Decode UTF-8, dropping invalid byte sequences instead of raising
pub(crate) fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .filter(|&c| c != char::REPLACEMENT_CHARACTER)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_lossy_passes_valid_utf8_through() {
        assert_eq!(decode_lossy("héllo, wörld".as_bytes()), "héllo, wörld");
    }

    #[test]
    fn test_decode_lossy_drops_invalid_sequences() {
        let bytes = b"good\xff\xfebad bytes removed";
        assert_eq!(decode_lossy(bytes), "goodbad bytes removed");
    }

    #[test]
    fn test_decode_lossy_empty_input() {
        assert_eq!(decode_lossy(b""), "");
    }
}
