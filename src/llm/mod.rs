//! Text completion client and prompt-template operations
//!
//! [`TextClient`] wraps any [`TextCompletion`] backend behind the four
//! fixed-template operations; [`GeminiClient`] is the production backend.

pub mod client;
pub mod gemini;
pub mod prompts;

pub use client::TextCompletion;
pub use gemini::{GeminiClient, GeminiConfig};
pub use prompts::TargetLanguage;

use crate::error::ToolResult;

/// Facade-facing wrapper over a completion backend
pub struct TextClient {
    inner: Box<dyn TextCompletion>,
}

impl std::fmt::Debug for TextClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextClient").finish_non_exhaustive()
    }
}

impl TextClient {
    pub fn new(client: impl TextCompletion + 'static) -> Self {
        Self {
            inner: Box::new(client),
        }
    }

    /// Answer a free-form question
    pub async fn answer(&self, query: &str) -> ToolResult<String> {
        self.inner.complete(&prompts::answer_instruction(query)).await
    }

    /// Translate text into the target language
    pub async fn translate(&self, text: &str, language: TargetLanguage) -> ToolResult<String> {
        self.inner
            .complete(&prompts::translate_instruction(text, language))
            .await
    }

    /// Generate a script for a task description, with fence markers stripped
    pub async fn generate_code(&self, task: &str) -> ToolResult<String> {
        let response = self.inner.complete(&prompts::code_instruction(task)).await?;
        Ok(prompts::strip_code_fences(&response))
    }

    /// Summarize text
    pub async fn summarize(&self, text: &str) -> ToolResult<String> {
        self.inner
            .complete(&prompts::summarize_instruction(text))
            .await
    }
}
