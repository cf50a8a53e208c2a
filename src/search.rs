//! Web search client for the Google Custom Search JSON API
//!
//! One HTTPS GET per query; upstream ranking order is preserved exactly,
//! no re-ranking happens here.

use crate::config::{ConfigError, DEFAULT_SEARCH_ENDPOINT};
use crate::error::{ToolError, ToolResult};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Search client configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub api_key: String,
    pub cx: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            cx: String::new(),
            endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// One ranked search result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    pub snippet: String,
    pub link: String,
}

/// HTTP client for the hosted search service
#[derive(Debug)]
pub struct SearchClient {
    config: SearchConfig,
    client: Client,
}

impl SearchClient {
    /// Create a new search client
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        if config.api_key.is_empty() || config.cx.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "search API key and engine id are required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::InvalidConfig(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Run one search, returning at most `num_results` results in upstream order
    pub async fn search(&self, query: &str, num_results: usize) -> ToolResult<Vec<SearchResult>> {
        let num = num_results.to_string();
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("cx", self.config.cx.as_str()),
                ("q", query),
                ("num", num.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ToolError::service("search", e.to_string()))?;

        // The upstream reports failures (quota, bad key) inside the JSON
        // body, so the payload is parsed regardless of HTTP status.
        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ToolError::service("search", format!("malformed response: {e}")))?;

        Self::results_from_response(body)
    }

    /// Turn an upstream payload into ordered results
    fn results_from_response(response: SearchResponse) -> ToolResult<Vec<SearchResult>> {
        let Some(items) = response.items else {
            let message = response
                .error
                .and_then(|error| error.message)
                .unwrap_or_else(|| "no results".to_string());
            return Err(ToolError::NoResults(message));
        };

        Ok(items
            .into_iter()
            .filter_map(|item| {
                let title = item.title?;
                let link = item.link?;
                Some(SearchResult {
                    title,
                    snippet: item.snippet.unwrap_or_default(),
                    link,
                })
            })
            .collect())
    }
}

/// Render results as blocks separated by blank lines, preserving order
pub fn format_results(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(|result| format!("**{}**\n{}\n{}\n", result.title, result.snippet, result.link))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Option<Vec<SearchItem>>,
    error: Option<SearchError>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    title: Option<String>,
    snippet: Option<String>,
    link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchError {
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response_from(value: serde_json::Value) -> SearchResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_client_requires_credentials() {
        let result = SearchClient::new(SearchConfig::default());
        assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
    }

    #[test]
    fn test_results_preserve_upstream_order() {
        let response = response_from(json!({
            "items": [
                {"title": "A", "snippet": "first", "link": "https://a.example"},
                {"title": "B", "snippet": "second", "link": "https://b.example"},
                {"title": "C", "snippet": "third", "link": "https://c.example"}
            ]
        }));

        let results = SearchClient::results_from_response(response).unwrap();
        let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_missing_items_surfaces_upstream_error_message() {
        let response = response_from(json!({
            "error": {"message": "Daily quota exceeded"}
        }));

        let err = SearchClient::results_from_response(response).unwrap_err();
        assert!(matches!(err, ToolError::NoResults(_)));
        assert!(err.to_string().contains("Daily quota exceeded"));
    }

    #[test]
    fn test_missing_items_without_error_uses_generic_message() {
        let response = response_from(json!({}));

        let err = SearchClient::results_from_response(response).unwrap_err();
        assert!(err.to_string().contains("no results"));
    }

    #[test]
    fn test_items_missing_title_or_link_are_skipped() {
        let response = response_from(json!({
            "items": [
                {"snippet": "no title", "link": "https://a.example"},
                {"title": "Kept", "link": "https://b.example"},
                {"title": "No link", "snippet": "dropped"}
            ]
        }));

        let results = SearchClient::results_from_response(response).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Kept");
        assert_eq!(results[0].snippet, "");
    }

    #[test]
    fn test_format_results_separates_blocks_with_blank_lines() {
        let results = vec![
            SearchResult {
                title: "A".to_string(),
                snippet: "first".to_string(),
                link: "https://a.example".to_string(),
            },
            SearchResult {
                title: "B".to_string(),
                snippet: "second".to_string(),
                link: "https://b.example".to_string(),
            },
        ];

        let rendered = format_results(&results);
        assert_eq!(
            rendered,
            "**A**\nfirst\nhttps://a.example\n\n**B**\nsecond\nhttps://b.example\n"
        );
        assert!(rendered.find("A").unwrap() < rendered.find("B").unwrap());
    }
}
