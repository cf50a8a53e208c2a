//! PDF text extraction via lopdf

use crate::error::{ToolError, ToolResult};
use lopdf::Document;
use std::path::Path;

/// Concatenate per-page text in page order
///
/// A page that yields no text (scanned images, empty content stream)
/// contributes an empty string rather than failing the whole document.
pub fn extract_text(path: &Path) -> ToolResult<String> {
    let document = Document::load(path).map_err(|e| ToolError::file_read(e.to_string()))?;

    let mut content = String::new();
    for page_number in document.get_pages().keys() {
        if let Ok(page_text) = document.extract_text(&[*page_number]) {
            content.push_str(&page_text);
        }
    }

    Ok(content)
}
