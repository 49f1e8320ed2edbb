use axum::{
    Json, Router,
    extract::State,
    response::{Sse, sse::Event},
    routing::get,
};
use futures::stream::{self, Stream};
use metrics::counter;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::service::SearchService;
use crate::tools::registry::{REGISTRY, ToolName};

const PROTOCOL_VERSION: &str = "2024-11-05";

const SERVER_INSTRUCTIONS: &str = "Un servidor que busca ofertas de empleo en Colombia y \
                                   realiza búsquedas web para que la IA las analice.";

/// MCP server state
pub struct McpState {
    pub service: Arc<SearchService>,
}

/// Build the MCP router
pub fn mcp_router(service: Arc<SearchService>) -> Router {
    let state = Arc::new(McpState { service });

    Router::new()
        .route("/", get(mcp_sse_handler))
        .route("/messages", axum::routing::post(mcp_message_handler))
        .with_state(state)
}

/// MCP SSE handler - implements the MCP protocol over SSE
async fn mcp_sse_handler(
    State(_state): State<Arc<McpState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    info!("MCP client connected");

    // Send server info as first event
    let server_info = McpServerInfo {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: McpCapabilities {
            tools: Some(McpToolsCapability { list_changed: false }),
            resources: None,
            prompts: None,
        },
        server_info: McpImplementation {
            name: "cumbre-service".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        instructions: Some(SERVER_INSTRUCTIONS.to_string()),
    };

    let info_json = serde_json::to_string(&McpMessage::ServerInfo(server_info)).unwrap_or_default();

    let stream = stream::once(async move { Ok::<_, Infallible>(Event::default().data(info_json)) });

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(30))
            .text("ping"),
    )
}

/// MCP message handler - handles JSON-RPC style requests
async fn mcp_message_handler(
    State(state): State<Arc<McpState>>,
    Json(request): Json<McpRequest>,
) -> Json<McpResponse> {
    debug!(method = %request.method, "MCP request received");

    let result = match request.method.as_str() {
        "initialize" => handle_initialize(&state).await,
        "tools/list" => handle_tools_list(&state).await,
        "tools/call" => handle_tool_call(&state, request.params).await,
        _ => Err(McpError {
            code: -32601,
            message: format!("Method not found: {}", request.method),
        }),
    };

    match result {
        Ok(data) => Json(McpResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: Some(data),
            error: None,
        }),
        Err(error) => Json(McpResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id,
            result: None,
            error: Some(error),
        }),
    }
}

async fn handle_initialize(_state: &McpState) -> Result<serde_json::Value, McpError> {
    Ok(serde_json::json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": false }
        },
        "serverInfo": {
            "name": "cumbre-service",
            "version": env!("CARGO_PKG_VERSION")
        },
        "instructions": SERVER_INSTRUCTIONS
    }))
}

async fn handle_tools_list(_state: &McpState) -> Result<serde_json::Value, McpError> {
    Ok(serde_json::json!({ "tools": REGISTRY.mcp_definitions() }))
}

/// Arguments for both search tools: a single required free-text query
#[derive(Debug, Deserialize)]
struct SearchToolParams {
    consulta: String,
}

async fn handle_tool_call(
    state: &McpState,
    params: Option<serde_json::Value>,
) -> Result<serde_json::Value, McpError> {
    let params = params.ok_or_else(|| McpError {
        code: -32602,
        message: "Missing params".to_string(),
    })?;

    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError {
            code: -32602,
            message: "Missing tool name".to_string(),
        })?;

    let tool = ToolName::from_str(name).map_err(|_| McpError {
        code: -32601,
        message: format!("Unknown tool: {}", name),
    })?;

    let arguments = params
        .get("arguments")
        .cloned()
        .unwrap_or(serde_json::json!({}));

    let args: SearchToolParams = serde_json::from_value(arguments).map_err(|e| McpError {
        code: -32602,
        message: format!("Invalid arguments: {}", e),
    })?;

    counter!("cumbre_tool_calls_total", "tool" => tool.to_string()).increment(1);

    // Both tools always produce a well-formed report; failures surface as
    // empty results or an error field inside the payload, never as a
    // protocol-level fault.
    let report = match tool {
        ToolName::BuscarEmpleosListaCruda => {
            let report = state.service.job_search(&args.consulta).await;
            serde_json::to_value(&report)
        }
        ToolName::BusquedaWebGoogle => {
            let report = state.service.web_search(&args.consulta).await;
            serde_json::to_value(&report)
        }
    }
    .map_err(|e| McpError {
        code: -32000,
        message: e.to_string(),
    })?;

    Ok(serde_json::json!({
        "content": [{
            "type": "text",
            "text": serde_json::to_string_pretty(&report).unwrap_or_default()
        }]
    }))
}

// MCP Protocol Types

#[derive(Debug, Serialize, Deserialize)]
struct McpRequest {
    jsonrpc: String,
    id: serde_json::Value,
    method: String,
    #[serde(default)]
    params: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct McpResponse {
    jsonrpc: String,
    id: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

#[derive(Debug, Serialize)]
struct McpError {
    code: i32,
    message: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum McpMessage {
    ServerInfo(McpServerInfo),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct McpServerInfo {
    protocol_version: String,
    capabilities: McpCapabilities,
    server_info: McpImplementation,
    #[serde(skip_serializing_if = "Option::is_none")]
    instructions: Option<String>,
}

#[derive(Debug, Serialize)]
struct McpCapabilities {
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<McpToolsCapability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resources: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prompts: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct McpToolsCapability {
    list_changed: bool,
}

#[derive(Debug, Serialize)]
struct McpImplementation {
    name: String,
    version: String,
}
