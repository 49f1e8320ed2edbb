//! HTTP API for the Cumbre search service.
//!
//! This module provides the plain HTTP endpoints alongside the MCP mount:
//! - Root status payload
//! - Health monitoring
//! - Prometheus metrics

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::service::SearchService;

pub mod search;
use search::{job_search_handler, web_search_handler};

/// Application state
pub struct AppState {
    pub service: Arc<SearchService>,
    pub start_time: Instant,
    pub metrics: PrometheusHandle,
}

/// Build the API router
pub fn router(service: Arc<SearchService>, metrics: PrometheusHandle) -> Router {
    let state = Arc::new(AppState {
        service,
        start_time: Instant::now(),
        metrics,
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/search/empleos", post(job_search_handler))
        .route("/search/web", post(web_search_handler));

    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// === Status, Health & Metrics ===

async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        servicio: "Servidor de Búsqueda de Empleos",
        estado: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct RootResponse {
    servicio: &'static str,
    estado: &'static str,
    version: &'static str,
}

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        mcp_enabled: state.service.config.mcp.enabled,
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    uptime_seconds: u64,
    mcp_enabled: bool,
}

async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
