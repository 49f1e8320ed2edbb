//! Serper search API client implementation.

use reqwest::Client;
use std::time::Duration;

use super::error::WebSearchError;
use super::responses::SerperResponse;

/// Default base URL for the Serper API
const DEFAULT_BASE_URL: &str = "https://google.serper.dev";

/// Default timeout for API requests
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Serper (Google search) API client
#[derive(Clone)]
pub struct SerperClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SerperClient {
    /// Create a new Serper client
    pub fn new(base_url: &str, api_key: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent("Cumbre-Search/1.0")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Create a client against the production endpoint
    pub fn with_api_key(api_key: &str) -> Self {
        Self::new(DEFAULT_BASE_URL, api_key, DEFAULT_TIMEOUT_SECS)
    }

    /// Issue a single search call for the query
    pub async fn search(&self, query: &str) -> Result<SerperResponse, WebSearchError> {
        let url = format!("{}/search", self.base_url);
        let body = serde_json::json!({ "q": urlencoding::encode(query) });

        let response = self
            .client
            .post(&url)
            .header("X-API-KEY", &self.api_key)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(WebSearchError::ApiError {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let results: SerperResponse = response.json().await?;
        Ok(results)
    }
}
