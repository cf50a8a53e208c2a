//! Tool facade: tagged-variant dispatch over the fixed tool set
//!
//! The facade validates inputs, calls exactly one leaf client per
//! invocation and normalizes the result. String selectors from a
//! presentation layer are parsed once by [`ToolKind::from_str`]; from
//! there on dispatch is an exhaustive match, so adding a tool without
//! handling it fails at compile time.

use crate::config::{ConfigError, ToolboxConfig, DEFAULT_GEMINI_BASE_URL};
use crate::error::{ToolError, ToolResult};
use crate::extract;
use crate::image::{AspectRatio, ImageClient, ImageConfig, ImageHandle, OutputFormat, Style};
use crate::llm::{GeminiClient, GeminiConfig, TargetLanguage, TextClient};
use crate::search::{self, SearchClient, SearchConfig};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

/// Number of characters of extracted text surfaced by AnalyzeFile
const PREVIEW_CHARS: usize = 1000;

/// The fixed tool enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    AskQuestion,
    Translate,
    GenerateCode,
    Summarize,
    AnalyzeFile,
    Search,
    GenerateImage,
}

impl ToolKind {
    pub const ALL: [ToolKind; 7] = [
        ToolKind::AskQuestion,
        ToolKind::Translate,
        ToolKind::GenerateCode,
        ToolKind::Summarize,
        ToolKind::AnalyzeFile,
        ToolKind::Search,
        ToolKind::GenerateImage,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::AskQuestion => "AskQuestion",
            ToolKind::Translate => "Translate",
            ToolKind::GenerateCode => "GenerateCode",
            ToolKind::Summarize => "Summarize",
            ToolKind::AnalyzeFile => "AnalyzeFile",
            ToolKind::Search => "Search",
            ToolKind::GenerateImage => "GenerateImage",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ToolError::UnknownTool(s.to_string()))
    }
}

/// Optional save target for a generated image
#[derive(Debug, Clone)]
pub struct SaveSpec {
    /// Path stem; the lowercased format extension is appended
    pub stem: String,
    pub format: OutputFormat,
}

/// One tool invocation, parameters included
#[derive(Debug, Clone)]
pub enum ToolRequest {
    AskQuestion {
        query: String,
    },
    Translate {
        text: String,
        language: TargetLanguage,
    },
    GenerateCode {
        task: String,
    },
    Summarize {
        text: String,
    },
    AnalyzeFile {
        path: PathBuf,
    },
    Search {
        query: String,
        max_results: Option<usize>,
    },
    GenerateImage {
        prompt: String,
        style: Style,
        aspect_ratio: AspectRatio,
        save: Option<SaveSpec>,
    },
}

impl ToolRequest {
    pub fn kind(&self) -> ToolKind {
        match self {
            ToolRequest::AskQuestion { .. } => ToolKind::AskQuestion,
            ToolRequest::Translate { .. } => ToolKind::Translate,
            ToolRequest::GenerateCode { .. } => ToolKind::GenerateCode,
            ToolRequest::Summarize { .. } => ToolKind::Summarize,
            ToolRequest::AnalyzeFile { .. } => ToolKind::AnalyzeFile,
            ToolRequest::Search { .. } => ToolKind::Search,
            ToolRequest::GenerateImage { .. } => ToolKind::GenerateImage,
        }
    }
}

/// Normalized result of one invocation
#[derive(Debug)]
pub enum ToolOutput {
    Text(String),
    Image {
        handle: ImageHandle,
        /// Where the image landed when a save was requested and succeeded
        saved: Option<PathBuf>,
        /// Save failure, reported without failing the generation
        save_error: Option<String>,
    },
}

impl ToolOutput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ToolOutput::Text(text) => Some(text),
            ToolOutput::Image { .. } => None,
        }
    }
}

/// The tool facade; owns one configured client per upstream service
#[derive(Debug)]
pub struct ToolFacade {
    text: TextClient,
    search: SearchClient,
    image: ImageClient,
    default_results: usize,
}

impl ToolFacade {
    /// Build a facade from explicitly constructed clients
    pub fn new(
        text: TextClient,
        search: SearchClient,
        image: ImageClient,
        default_results: usize,
    ) -> Self {
        Self {
            text,
            search,
            image,
            default_results,
        }
    }

    /// Build a facade from configuration, resolving credentials once
    ///
    /// A missing key environment variable fails here, before any tool can
    /// be invoked.
    pub fn from_config(config: &ToolboxConfig) -> Result<Self, ConfigError> {
        let gemini = GeminiClient::new(GeminiConfig {
            api_key: config.get_llm_api_key()?,
            model: config.llm.model.clone(),
            base_url: config
                .llm
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            ..Default::default()
        })?;

        let search = SearchClient::new(SearchConfig {
            api_key: config.get_search_api_key()?,
            cx: config.get_search_cx()?,
            endpoint: config
                .search
                .endpoint
                .clone()
                .unwrap_or_else(|| SearchConfig::default().endpoint),
            ..Default::default()
        })?;

        let image = ImageClient::new(ImageConfig::new(config.image.endpoint.clone()))?;

        Ok(Self::new(
            TextClient::new(gemini),
            search,
            image,
            config.search.num_results,
        ))
    }

    /// Invoke one tool: validate, call the one matching leaf client,
    /// normalize the result
    pub async fn invoke(&self, request: ToolRequest) -> ToolResult<ToolOutput> {
        let kind = request.kind();
        info!(tool = kind.name(), "invoking tool");

        match request {
            ToolRequest::AskQuestion { query } => {
                let query = non_empty("query", &query)?;
                Ok(ToolOutput::Text(self.text.answer(query).await?))
            }
            ToolRequest::Translate { text, language } => {
                let text = non_empty("text", &text)?;
                Ok(ToolOutput::Text(self.text.translate(text, language).await?))
            }
            ToolRequest::GenerateCode { task } => {
                let task = non_empty("task", &task)?;
                Ok(ToolOutput::Text(self.text.generate_code(task).await?))
            }
            ToolRequest::Summarize { text } => {
                let text = non_empty("text", &text)?;
                Ok(ToolOutput::Text(self.text.summarize(text).await?))
            }
            ToolRequest::AnalyzeFile { path } => {
                let document = extract::extract(&path)?;
                Ok(ToolOutput::Text(preview(&document.text, PREVIEW_CHARS)))
            }
            ToolRequest::Search { query, max_results } => {
                let query = non_empty("query", &query)?;
                let num_results = max_results.unwrap_or(self.default_results);
                let results = self.search.search(query, num_results).await?;
                Ok(ToolOutput::Text(search::format_results(&results)))
            }
            ToolRequest::GenerateImage {
                prompt,
                style,
                aspect_ratio,
                save,
            } => {
                let prompt = non_empty("prompt", &prompt)?;
                let handle = self.image.generate(prompt, style, aspect_ratio).await?;

                let (saved, save_error) = match save {
                    None => (None, None),
                    Some(spec) => match handle.save(&spec.stem, spec.format) {
                        Ok(path) => (Some(path), None),
                        Err(e) => {
                            warn!(error = %e, "image generated but save failed");
                            (None, Some(e.to_string()))
                        }
                    },
                };

                Ok(ToolOutput::Image {
                    handle,
                    saved,
                    save_error,
                })
            }
        }
    }
}

/// Reject empty (after trim) input before any outbound call; the original
/// text is forwarded verbatim when it passes
fn non_empty<'a>(field: &'static str, value: &'a str) -> ToolResult<&'a str> {
    if value.trim().is_empty() {
        Err(ToolError::empty_input(field))
    } else {
        Ok(value)
    }
}

/// First `max_chars` characters, respecting char boundaries
fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Extract a preview from an uploaded document held in memory
pub fn analyze_upload(file_name: &str, bytes: &[u8]) -> ToolResult<String> {
    let document = extract::extract_upload(file_name, bytes)?;
    Ok(preview(&document.text, PREVIEW_CHARS))
}
