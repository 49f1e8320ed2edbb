use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;
use tracing::info;

mod api;
mod config;
mod error;
mod mcp;
mod service;
mod tools;

use crate::config::StaticConfig;
use crate::service::SearchService;

// Re-export config crate types to avoid namespace collision
use ::config::{Config as ConfigBuilder, Environment, File};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    init_logging();

    info!(
        "Starting Cumbre search service v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Load static configuration (server binding, outbound API settings)
    let static_config: StaticConfig = ConfigBuilder::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("CUMBRE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;

    // Missing secrets are a startup error, never a silent default
    static_config.validate()?;

    info!(
        host = %static_config.server.host,
        port = static_config.server.port,
        "Static configuration loaded"
    );

    let config = Arc::new(static_config);

    // Install the Prometheus recorder before any counters are touched
    let metrics_handle = PrometheusBuilder::new().install_recorder()?;

    // Initialize the service
    let service = Arc::new(SearchService::new(config.clone())?);

    // Build the router
    let mut app = api::router(service.clone(), metrics_handle);

    // Add MCP endpoint if enabled
    if config.mcp.enabled {
        info!(path = %config.mcp.path, "MCP server enabled");
        app = app.nest(&config.mcp.path, mcp::mcp_router(service.clone()));
    }

    // Start the server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let format = fmt::format()
        .with_target(true)
        .with_thread_ids(true)
        .compact();

    // Use RUST_LOG if set, otherwise default to info level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cumbre_service=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().event_format(format))
        .with(filter)
        .init();
}
