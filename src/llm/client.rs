//! Completion client trait for dependency injection and testing

use crate::error::ToolResult;
use async_trait::async_trait;

/// A client that turns one prompt into one generated text
#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// Issue a single synchronous completion call
    async fn complete(&self, prompt: &str) -> ToolResult<String>;
}
