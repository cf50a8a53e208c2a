//! Document text extraction
//!
//! Dispatches on the (case-insensitive) file extension to a format-specific
//! routine. Extraction is local and synchronous; no result is cached.

mod docx;
mod pdf;
mod sheet;
mod text;

use crate::error::{ToolError, ToolResult};
use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;

/// Plain text pulled out of one document
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub text: String,
    /// Lowercased source extension including the leading dot
    pub extension: String,
}

/// Extract the text content of a file, dispatching on its extension
pub fn extract(path: &Path) -> ToolResult<ExtractedDocument> {
    let extension = extension_of(path);

    let text = match extension.as_str() {
        ".pdf" => pdf::extract_text(path)?,
        ".docx" => docx::extract_text(path)?,
        ".xlsx" => sheet::extract_text(path)?,
        ".csv" | ".txt" => text::extract_text(path)?,
        _ => return Err(ToolError::UnsupportedFileType(extension)),
    };

    if text.is_empty() {
        return Err(ToolError::NoContentExtracted);
    }

    Ok(ExtractedDocument { text, extension })
}

/// Extract content from an in-memory upload
///
/// The bytes are staged in a named temp file carrying the upload's
/// extension so dispatch works; the temp file is removed on every exit
/// path when the handle drops.
pub fn extract_upload(file_name: &str, bytes: &[u8]) -> ToolResult<ExtractedDocument> {
    let extension = extension_of(Path::new(file_name));

    let mut staged = tempfile::Builder::new()
        .prefix("toolbox-upload-")
        .suffix(&extension)
        .tempfile()
        .map_err(|e| ToolError::file_read(e.to_string()))?;

    staged
        .write_all(bytes)
        .map_err(|e| ToolError::file_read(e.to_string()))?;
    staged
        .flush()
        .map_err(|e| ToolError::file_read(e.to_string()))?;

    extract(staged.path())
}

/// Lowercased extension with its leading dot, or an empty string
fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|extension| format!(".{}", extension.to_lowercase()))
        .unwrap_or_default()
}
