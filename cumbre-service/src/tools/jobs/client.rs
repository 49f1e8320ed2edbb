//! Cumbre search API client implementation.

use reqwest::Client;
use std::time::Duration;

use super::error::JobSearchError;
use super::responses::VacancyListResponse;

/// Default base URL for the Cumbre search API
const DEFAULT_BASE_URL: &str = "https://api-search.cumbre.icu";

/// Default timeout for API requests
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default page size sent as the `limit` parameter
const DEFAULT_PAGE_SIZE: u32 = 20;

/// Cumbre job-listing search API client
#[derive(Clone)]
pub struct JobSearchClient {
    client: Client,
    base_url: String,
    page_size: u32,
}

impl Default for JobSearchClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_PAGE_SIZE)
    }
}

impl JobSearchClient {
    /// Create a new Cumbre search client
    pub fn new(base_url: &str, timeout_secs: u64, page_size: u32) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent("Cumbre-Search/1.0")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size,
        }
    }

    /// Build the search URL for a query variant (first page only)
    pub fn search_url(&self, variant: &str) -> String {
        format!(
            "{}/search/{}?limit={}&page=1",
            self.base_url,
            urlencoding::encode(variant),
            self.page_size
        )
    }

    /// Fetch the first page of vacancies matching a query variant
    pub async fn search(&self, variant: &str) -> Result<VacancyListResponse, JobSearchError> {
        let url = self.search_url(variant);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(JobSearchError::ApiError {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let results: VacancyListResponse = response.json().await?;
        Ok(results)
    }
}
