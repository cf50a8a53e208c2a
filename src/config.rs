//! Configuration loading for the toolbox
//!
//! API keys are never stored in the config file itself; each section names
//! the environment variable that holds its credential. Keys are resolved
//! once when the facade is constructed, so a missing variable halts startup
//! instead of failing on the first call.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default Google Generative Language API base URL
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default Google Custom Search endpoint
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Main toolbox configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolboxConfig {
    pub llm: LlmSection,
    pub search: SearchSection,
    pub image: ImageSection,
}

/// Language-model completion service settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LlmSection {
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable containing the API key
    pub api_key_env: String,
    /// Override for the service base URL
    pub base_url: Option<String>,
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

/// Web search service settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchSection {
    /// Environment variable containing the API key
    pub api_key_env: String,
    /// Environment variable containing the search engine id
    pub cx_env: String,
    /// Override for the search endpoint
    pub endpoint: Option<String>,
    /// Default number of results per query
    #[serde(default = "default_num_results")]
    pub num_results: usize,
}

fn default_num_results() -> usize {
    3
}

/// Image synthesis service settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageSection {
    /// Full URL of the diffusion service generate endpoint
    pub endpoint: String,
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ToolboxConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: ToolboxConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate endpoint URLs without resolving credentials
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(base_url) = &self.llm.base_url {
            validate_url("llm.base_url", base_url)?;
        }
        if let Some(endpoint) = &self.search.endpoint {
            validate_url("search.endpoint", endpoint)?;
        }
        validate_url("image.endpoint", &self.image.endpoint)?;

        if self.search.num_results == 0 {
            return Err(ConfigError::InvalidConfig(
                "search.num_results must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Helper method to get an environment variable with error propagation
    fn get_env_var_required(env_var_name: &str) -> Result<String, ConfigError> {
        std::env::var(env_var_name)
            .map_err(|_| ConfigError::EnvVarNotFound(env_var_name.to_string()))
    }

    /// Get the language-model API key from its environment variable
    pub fn get_llm_api_key(&self) -> Result<String, ConfigError> {
        Self::get_env_var_required(&self.llm.api_key_env)
    }

    /// Get the search API key from its environment variable
    pub fn get_search_api_key(&self) -> Result<String, ConfigError> {
        Self::get_env_var_required(&self.search.api_key_env)
    }

    /// Get the search engine id from its environment variable
    pub fn get_search_cx(&self) -> Result<String, ConfigError> {
        Self::get_env_var_required(&self.search.cx_env)
    }
}

fn validate_url(field: &str, value: &str) -> Result<(), ConfigError> {
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidConfig(format!("{field} is not a valid URL: {e}")))
}
