//! Toolbox - a unified facade over hosted AI services
//!
//! One [`ToolFacade`] dispatches a fixed set of tools to their upstream
//! services:
//! - text completion (answer, translate, generate code, summarize)
//! - web search with ordered result formatting
//! - local document text extraction (PDF, DOCX, XLSX, CSV, TXT)
//! - image synthesis with aspect-ratio resolution and multi-format save
//!
//! Each invocation is request-scoped and synchronous from the caller's
//! point of view: one outbound call, one normalized result, no retries,
//! no state carried between calls.
//!
//! # Quick Start
//!
//! ```rust
//! use toolbox::{ToolKind, ToolRequest};
//!
//! // Selectors from a presentation layer parse into the fixed tool set
//! let kind: ToolKind = "Translate".parse().unwrap();
//! assert_eq!(kind, ToolKind::Translate);
//!
//! // Unrecognized selectors fail instead of being forwarded upstream
//! assert!("NotATool".parse::<ToolKind>().is_err());
//!
//! // Requests are tagged variants; dispatch on them is exhaustive
//! let request = ToolRequest::Search {
//!     query: "rust web frameworks".to_string(),
//!     max_results: None,
//! };
//! assert_eq!(request.kind(), ToolKind::Search);
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod facade;
pub mod image;
pub mod llm;
pub mod logging;
pub mod search;

pub use config::{ConfigError, ToolboxConfig};
pub use error::{ToolError, ToolResult};
pub use facade::{analyze_upload, SaveSpec, ToolFacade, ToolKind, ToolOutput, ToolRequest};
pub use image::{AspectRatio, ImageHandle, OutputFormat, Style};
pub use llm::TargetLanguage;
pub use search::SearchResult;
