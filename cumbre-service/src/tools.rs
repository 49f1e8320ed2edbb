//! Search tool implementations exposed through the MCP server.

pub mod jobs;
pub mod registry;
pub mod web;
