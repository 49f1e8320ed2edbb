//! Response types for the Cumbre search API.

use serde::{Deserialize, Serialize};

/// Body of a successful search call.
///
/// Vacancies are kept as opaque JSON objects: the only field this service
/// inspects is `id`, which is the merge key. Everything else passes through
/// untouched for the calling agent to analyze.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyListResponse {
    #[serde(default)]
    pub vacancies: Vec<serde_json::Value>,
}
