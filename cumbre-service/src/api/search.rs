//! Search API endpoints.
//!
//! Plain HTTP access to the same capabilities the MCP tools expose, mainly
//! for smoke testing and operational checks.

use axum::{Json, extract::State};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ServiceError;
use crate::tools::jobs::JobSearchReport;
use crate::tools::web::WebSearchReport;

use super::AppState;

/// Search request: one free-text query
#[derive(Deserialize)]
pub struct SearchRequest {
    pub consulta: String,
}

/// Run the job-listing search over plain HTTP
pub async fn job_search_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> Json<JobSearchReport> {
    // A blank query legitimately yields an empty report, never an error
    Json(state.service.job_search(&request.consulta).await)
}

/// Run the web search over plain HTTP
pub async fn web_search_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<WebSearchReport>, ServiceError> {
    if request.consulta.trim().is_empty() {
        return Err(ServiceError::InvalidRequest {
            message: "consulta must not be blank".to_string(),
        });
    }

    Ok(Json(state.service.web_search(&request.consulta).await))
}
