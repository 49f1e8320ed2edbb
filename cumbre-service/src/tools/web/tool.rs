//! Single-shot web search and summary formatting.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::client::SerperClient;
use super::responses::SerperResponse;

/// Maximum number of organic results included in the summary
const MAX_ORGANIC_RESULTS: usize = 5;

/// Result payload returned to the calling agent.
///
/// On success `resumen` carries the formatted summary; on failure it is
/// empty and `error` explains what happened. Either way the payload is
/// well-formed, never a protocol fault.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSearchReport {
    /// The raw query as submitted
    pub consulta: String,
    /// Human-readable summary of the provider response
    pub resumen: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Web search tool: one provider call plus text summarization
pub struct WebSearchTool<'a> {
    client: &'a SerperClient,
}

impl<'a> WebSearchTool<'a> {
    pub fn new(client: &'a SerperClient) -> Self {
        Self { client }
    }

    /// Execute a web search for a raw free-text query.
    pub async fn execute(&self, consulta: &str) -> WebSearchReport {
        match self.client.search(consulta).await {
            Ok(response) => WebSearchReport {
                consulta: consulta.to_string(),
                resumen: format_summary(consulta, &response),
                error: None,
            },
            Err(e) => {
                warn!(consulta = %consulta, error = %e, "Web search failed");
                WebSearchReport {
                    consulta: consulta.to_string(),
                    resumen: String::new(),
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

/// Build the Spanish text summary for a provider response.
///
/// Always starts with a header line referencing the query; sections are
/// appended only when the provider returned something for them.
pub fn format_summary(consulta: &str, response: &SerperResponse) -> String {
    let mut summary = format!("Resultados de búsqueda web para: \"{consulta}\"\n");

    if let Some(answer_box) = &response.answer_box {
        if let Some(text) = answer_box.text() {
            summary.push_str(&format!("\nRespuesta destacada: {text}\n"));
        }
    }

    if let Some(kg) = &response.knowledge_graph {
        match (&kg.title, &kg.description) {
            (Some(title), Some(description)) => {
                summary.push_str(&format!("\nInformación clave: {title}: {description}\n"));
            }
            (Some(title), None) => {
                summary.push_str(&format!("\nInformación clave: {title}\n"));
            }
            (None, Some(description)) => {
                summary.push_str(&format!("\nInformación clave: {description}\n"));
            }
            (None, None) => {}
        }
    }

    if !response.organic.is_empty() {
        summary.push_str("\nResultados orgánicos:\n");
        for (i, result) in response.organic.iter().take(MAX_ORGANIC_RESULTS).enumerate() {
            summary.push_str(&format!(
                "{}. {}\n",
                i + 1,
                result.title.as_deref().unwrap_or("(sin título)")
            ));
            if let Some(link) = &result.link {
                summary.push_str(&format!("   {link}\n"));
            }
            if let Some(snippet) = &result.snippet {
                summary.push_str(&format!("   {snippet}\n"));
            }
        }
    }

    summary
}
