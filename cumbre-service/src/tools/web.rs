//! Web search integration (Serper-style Google search provider).
//!
//! Unlike the jobs tool this is a single-shot call: one POST to the
//! provider, and transport failure produces an error-shaped report instead
//! of a partial result.

mod client;
mod error;
mod responses;
mod tool;

pub use client::SerperClient;
pub use error::WebSearchError;
pub use responses::{AnswerBox, KnowledgeGraph, OrganicResult, SerperResponse};
pub use tool::{WebSearchReport, WebSearchTool, format_summary};
