//! Service layer owning the outbound API clients.

use std::sync::Arc;

use tracing::info;

use crate::config::StaticConfig;
use crate::error::ServiceError;
use crate::tools::jobs::{JobSearchClient, JobSearchReport, JobSearchTool};
use crate::tools::web::{SerperClient, WebSearchReport, WebSearchTool};

/// Shared service state: configuration plus one client per outbound API.
///
/// Constructed once at startup and shared behind an `Arc`. Individual tool
/// invocations carry no state of their own, so the service itself needs no
/// interior mutability.
pub struct SearchService {
    pub config: Arc<StaticConfig>,
    jobs_client: JobSearchClient,
    serper_client: SerperClient,
}

impl SearchService {
    /// Build the service from validated configuration
    pub fn new(config: Arc<StaticConfig>) -> Result<Self, ServiceError> {
        let api_key = config
            .serper
            .api_key
            .as_deref()
            .ok_or_else(|| ServiceError::Config {
                message: "serper.api_key is required".to_string(),
            })?;

        let jobs_client = JobSearchClient::new(
            &config.jobs.base_url,
            config.jobs.timeout_secs,
            config.jobs.page_size,
        );
        let serper_client =
            SerperClient::new(&config.serper.base_url, api_key, config.serper.timeout_secs);

        info!(
            jobs_api = %config.jobs.base_url,
            serper_api = %config.serper.base_url,
            "Search clients initialized"
        );

        Ok(Self {
            config,
            jobs_client,
            serper_client,
        })
    }

    /// Run the job-listing search for a raw query
    pub async fn job_search(&self, consulta: &str) -> JobSearchReport {
        JobSearchTool::new(&self.jobs_client).execute(consulta).await
    }

    /// Run the single-shot web search for a raw query
    pub async fn web_search(&self, consulta: &str) -> WebSearchReport {
        WebSearchTool::new(&self.serper_client).execute(consulta).await
    }
}
