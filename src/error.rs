//! Error types for tool invocations
//!
//! Every error is terminal for the invocation that raised it; nothing is
//! retried. Configuration and credential errors live in [`crate::config`]
//! and are raised once at startup, never per call.

use thiserror::Error;

/// Main error type for tool facade operations
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("{field} must not be empty")]
    EmptyInput { field: &'static str },

    #[error("{service} request failed: {message}")]
    Service {
        service: &'static str,
        message: String,
    },

    #[error("No search results: {0}")]
    NoResults(String),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("No text could be extracted from the file")]
    NoContentExtracted,

    #[error("An error occurred while reading the file: {0}")]
    FileRead(String),
}

impl ToolError {
    /// Create a service error carrying the upstream message verbatim
    pub fn service<S: Into<String>>(service: &'static str, message: S) -> Self {
        Self::Service {
            service,
            message: message.into(),
        }
    }

    /// Create an empty-input validation error
    pub fn empty_input(field: &'static str) -> Self {
        Self::EmptyInput { field }
    }

    /// Create a file read error wrapping an underlying parser failure
    pub fn file_read<S: Into<String>>(message: S) -> Self {
        Self::FileRead(message.into())
    }
}

/// Result type for tool facade operations
pub type ToolResult<T> = Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_carries_upstream_message() {
        let error = ToolError::service("gemini", "HTTP 500: internal");
        assert_eq!(
            error.to_string(),
            "gemini request failed: HTTP 500: internal"
        );
    }

    #[test]
    fn test_empty_input_names_field() {
        let error = ToolError::empty_input("query");
        assert_eq!(error.to_string(), "query must not be empty");
    }

    #[test]
    fn test_unsupported_file_type_names_extension() {
        let error = ToolError::UnsupportedFileType(".exe".to_string());
        assert_eq!(error.to_string(), "Unsupported file type: .exe");
    }

    #[test]
    fn test_unknown_tool_names_selector() {
        let error = ToolError::UnknownTool("NotATool".to_string());
        assert_eq!(error.to_string(), "Unknown tool: NotATool");
    }

    #[test]
    fn test_all_variants_have_nonempty_display() {
        let errors = vec![
            ToolError::UnknownTool("x".to_string()),
            ToolError::empty_input("text"),
            ToolError::service("search", "boom"),
            ToolError::NoResults("quota exceeded".to_string()),
            ToolError::UnsupportedFileType(".bin".to_string()),
            ToolError::NoContentExtracted,
            ToolError::file_read("truncated archive"),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }
}
