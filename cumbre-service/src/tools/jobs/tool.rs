//! Fan-out and merge logic for the job search tool.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::client::JobSearchClient;
use super::expand_query;

/// Result payload returned to the calling agent.
///
/// Field names are the wire contract consumed by existing agent prompts, so
/// they stay in Spanish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSearchReport {
    /// Query variants actually issued against the search API
    pub consultas_realizadas: Vec<String>,
    /// Deduplicated vacancies collected across all variants
    pub vacantes_encontradas: Vec<Value>,
}

/// Job search tool: query expansion plus per-variant fetch-merge
pub struct JobSearchTool<'a> {
    client: &'a JobSearchClient,
}

impl<'a> JobSearchTool<'a> {
    pub fn new(client: &'a JobSearchClient) -> Self {
        Self { client }
    }

    /// Execute a job search for a raw free-text query.
    ///
    /// Expands the query into variants, issues one sequential call per
    /// variant, and merges vacancies by their `id` field, last write
    /// winning. A variant whose call fails contributes nothing; the report
    /// is always well-formed, even when every variant fails.
    pub async fn execute(&self, consulta: &str) -> JobSearchReport {
        let variants = expand_query(consulta);

        // Merge keyed by vacancy id; `order` keeps first-write insertion
        // order so the output is deterministic within an invocation.
        let mut merged: HashMap<String, Value> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        for variant in &variants {
            match self.client.search(variant).await {
                Ok(response) => {
                    debug!(
                        variant = %variant,
                        count = response.vacancies.len(),
                        "Variant fetched"
                    );
                    for vacancy in response.vacancies {
                        let Some(id) = vacancy.get("id") else {
                            warn!(variant = %variant, "Vacancy without id field, skipping");
                            continue;
                        };
                        let key = match id {
                            Value::String(s) => s.clone(),
                            other => other.to_string(),
                        };
                        if merged.insert(key.clone(), vacancy).is_none() {
                            order.push(key);
                        }
                    }
                }
                Err(e) => {
                    warn!(variant = %variant, error = %e, "Variant failed, continuing");
                }
            }
        }

        let vacantes_encontradas = order
            .iter()
            .filter_map(|key| merged.remove(key))
            .collect();

        JobSearchReport {
            consultas_realizadas: variants,
            vacantes_encontradas,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, path_regex, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> JobSearchClient {
        JobSearchClient::new(&server.uri(), 5, 20)
    }

    #[tokio::test]
    async fn test_merge_deduplicates_across_variants() {
        let server = MockServer::start().await;
        let body = json!({
            "vacancies": [
                { "id": "v1", "titulo": "Vendedor" },
                { "id": "v2", "titulo": "Cajero" }
            ]
        });

        // Both variants return the same two vacancies
        Mock::given(method("GET"))
            .and(path("/search/alpha"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/search/alpha.*remoto$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let report = JobSearchTool::new(&client).execute("alpha").await;

        assert_eq!(report.consultas_realizadas.len(), 2);
        assert_eq!(report.vacantes_encontradas.len(), 2);
    }

    #[tokio::test]
    async fn test_last_write_wins_on_collision() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/alpha"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "vacancies": [{ "id": "v1", "titulo": "Primera" }]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/search/alpha.*remoto$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "vacancies": [{ "id": "v1", "titulo": "Segunda" }]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let report = JobSearchTool::new(&client).execute("alpha").await;

        assert_eq!(report.vacantes_encontradas.len(), 1);
        assert_eq!(report.vacantes_encontradas[0]["titulo"], "Segunda");
    }

    #[tokio::test]
    async fn test_partial_failure_keeps_successful_variant() {
        let server = MockServer::start().await;

        // Only the plain variant is mocked; the remote variant gets the
        // mock server's default 404 and must be skipped without aborting.
        Mock::given(method("GET"))
            .and(path("/search/alpha"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "vacancies": [{ "id": "v1", "titulo": "Vendedor" }]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let report = JobSearchTool::new(&client).execute("alpha").await;

        assert_eq!(report.consultas_realizadas.len(), 2);
        assert_eq!(report.vacantes_encontradas.len(), 1);
        assert_eq!(report.vacantes_encontradas[0]["id"], "v1");
    }

    #[tokio::test]
    async fn test_total_failure_returns_well_formed_report() {
        let server = MockServer::start().await;

        let client = client_for(&server);
        let report = JobSearchTool::new(&client).execute("alpha").await;

        assert_eq!(report.consultas_realizadas.len(), 2);
        assert!(report.vacantes_encontradas.is_empty());
    }

    #[tokio::test]
    async fn test_blank_query_issues_no_calls() {
        let server = MockServer::start().await;

        let client = client_for(&server);
        let report = JobSearchTool::new(&client).execute("   ").await;

        assert!(report.consultas_realizadas.is_empty());
        assert!(report.vacantes_encontradas.is_empty());
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_vacancy_without_id_is_skipped() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/alpha"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "vacancies": [
                    { "titulo": "Sin identificador" },
                    { "id": "v1", "titulo": "Vendedor" }
                ]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let report = JobSearchTool::new(&client).execute("alpha").await;

        assert_eq!(report.vacantes_encontradas.len(), 1);
        assert_eq!(report.vacantes_encontradas[0]["id"], "v1");
    }

    #[tokio::test]
    async fn test_missing_vacancies_field_treated_as_empty() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/alpha"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let report = JobSearchTool::new(&client).execute("alpha").await;

        assert!(report.vacantes_encontradas.is_empty());
    }

    #[tokio::test]
    async fn test_pagination_params_sent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search/alpha"))
            .and(query_param("limit", "20"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "vacancies": [{ "id": "v1" }]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let report = JobSearchTool::new(&client).execute("alpha").await;

        assert_eq!(report.vacantes_encontradas.len(), 1);
    }
}
