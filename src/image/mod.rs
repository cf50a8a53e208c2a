//! Image synthesis client
//!
//! Wraps the hosted diffusion service: composed prompt and resolved pixel
//! dimensions in, one decoded raster image out.

mod aspect;
mod save;

pub use aspect::AspectRatio;
pub use save::{OutputFormat, SaveError};

use crate::config::ConfigError;
use crate::error::{ToolError, ToolResult};
use image::DynamicImage;
use reqwest::Client;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Fixed set of artistic styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    None,
    Photorealistic,
    Cartoon,
    OilPainting,
    Fantasy,
}

impl Style {
    pub const ALL: [Style; 5] = [
        Style::None,
        Style::Photorealistic,
        Style::Cartoon,
        Style::OilPainting,
        Style::Fantasy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Style::None => "None",
            Style::Photorealistic => "Photorealistic",
            Style::Cartoon => "Cartoon",
            Style::OilPainting => "Oil Painting",
            Style::Fantasy => "Fantasy",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unsupported style: {s}"))
    }
}

/// Append the style name as a trailing qualifier clause
pub fn compose_prompt(prompt: &str, style: Style) -> String {
    match style {
        Style::None => prompt.to_string(),
        styled => format!("{prompt}, {styled} style"),
    }
}

/// Image client configuration
#[derive(Debug, Clone)]
pub struct ImageConfig {
    /// Full URL of the generate endpoint
    pub endpoint: String,
    pub timeout: Duration,
}

impl ImageConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            // Diffusion runs are slow; allow well beyond the usual HTTP default
            timeout: Duration::from_secs(300),
        }
    }
}

/// One generated image, detached from the service that produced it
#[derive(Debug, Clone)]
pub struct ImageHandle {
    image: DynamicImage,
}

impl ImageHandle {
    pub fn new(image: DynamicImage) -> Self {
        Self { image }
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    /// Encode to `<stem>.<lowercased-format>` without touching the held pixels
    pub fn save(&self, stem: &str, format: OutputFormat) -> Result<PathBuf, SaveError> {
        save::save_as(&self.image, stem, format)
    }
}

#[derive(Debug, Serialize)]
struct GenerateImageRequest<'a> {
    prompt: &'a str,
    width: u32,
    height: u32,
}

/// HTTP client for the hosted diffusion service
#[derive(Debug)]
pub struct ImageClient {
    config: ImageConfig,
    client: Client,
}

impl ImageClient {
    /// Create a new image client
    pub fn new(config: ImageConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::InvalidConfig(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Generate one image for the composed prompt at the resolved dimensions
    pub async fn generate(
        &self,
        prompt: &str,
        style: Style,
        aspect_ratio: AspectRatio,
    ) -> ToolResult<ImageHandle> {
        let prompt = compose_prompt(prompt, style);
        let (width, height) = aspect_ratio.dimensions();

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&GenerateImageRequest {
                prompt: &prompt,
                width,
                height,
            })
            .send()
            .await
            .map_err(|e| ToolError::service("image", e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ToolError::service(
                "image",
                format!("HTTP {status}: {error_text}"),
            ));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ToolError::service("image", e.to_string()))?;

        let image = image::load_from_memory(&bytes)
            .map_err(|e| ToolError::service("image", format!("undecodable image: {e}")))?;

        Ok(ImageHandle::new(image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_prompt_with_style() {
        assert_eq!(
            compose_prompt("a red fox", Style::OilPainting),
            "a red fox, Oil Painting style"
        );
    }

    #[test]
    fn test_compose_prompt_without_style() {
        assert_eq!(compose_prompt("a red fox", Style::None), "a red fox");
    }

    #[test]
    fn test_style_parse() {
        assert_eq!("Oil Painting".parse::<Style>().unwrap(), Style::OilPainting);
        assert_eq!("none".parse::<Style>().unwrap(), Style::None);
        assert!("Vaporwave".parse::<Style>().is_err());
    }

    #[test]
    fn test_request_serialization() {
        let request = GenerateImageRequest {
            prompt: "cat",
            width: 512,
            height: 512,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"prompt":"cat","width":512,"height":512}"#);
    }

    #[test]
    fn test_handle_reports_dimensions() {
        let handle = ImageHandle::new(DynamicImage::new_rgb8(4, 2));
        assert_eq!(handle.dimensions(), (4, 2));
    }
}
