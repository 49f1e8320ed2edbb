//! Response types for the Serper search API.

use serde::{Deserialize, Serialize};

/// Body of a search call. Every section is optional; an empty object is a
/// valid (if unhelpful) provider response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerperResponse {
    #[serde(default)]
    pub answer_box: Option<AnswerBox>,
    #[serde(default)]
    pub knowledge_graph: Option<KnowledgeGraph>,
    #[serde(default)]
    pub organic: Vec<OrganicResult>,
}

/// Direct answer extracted by the provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerBox {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
}

/// Knowledge-graph panel (entity title plus description)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeGraph {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One organic search result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
}

impl AnswerBox {
    /// Best available answer text, preferring the direct answer
    pub fn text(&self) -> Option<&str> {
        self.answer.as_deref().or(self.snippet.as_deref())
    }
}
