//! Tool registry for the MCP server.
//!
//! This module is the single source of truth for tool definitions. Tool
//! names are derived from enum variants via strum, eliminating any
//! possibility of name mismatches between the listing and the dispatch.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// All tool names as an exhaustive enum.
///
/// Adding a new tool requires:
/// 1. Add variant here
/// 2. Register metadata in `ToolRegistry::new`
/// 3. Add handler in the MCP dispatch (compile error if missing due to
///    exhaustive match)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ToolName {
    /// Raw job-listing search across query variants
    BuscarEmpleosListaCruda,

    /// Single-shot Google web search via Serper
    BusquedaWebGoogle,
}

/// Metadata for a tool definition.
///
/// The tool name string is derived from the `name` enum variant via strum,
/// ensuring it's impossible to have a mismatch between the enum and the
/// string.
#[derive(Debug, Clone)]
pub struct ToolMetadata {
    /// Tool identifier - string representation derived via strum Display
    pub name: ToolName,

    /// Tool description shown to the calling agent
    pub description: &'static str,

    /// Tool category for organizational purposes
    pub category: &'static str,

    /// JSON Schema for tool parameters (called lazily to avoid static
    /// initialization issues)
    pub parameters: fn() -> serde_json::Value,
}

/// Central registry of all tools.
pub struct ToolRegistry {
    tools: HashMap<ToolName, ToolMetadata>,
}

impl ToolRegistry {
    /// Build the registry from all registered tool definitions
    pub fn new() -> Self {
        let mut tools = HashMap::new();

        tools.insert(
            ToolName::BuscarEmpleosListaCruda,
            ToolMetadata {
                name: ToolName::BuscarEmpleosListaCruda,
                description: "Busca ofertas de empleo en Colombia. Una buena consulta debe \
                              incluir el puesto y/o la ciudad. Por ejemplo: 'vendedor en \
                              Cúcuta', 'desarrollador remoto', 'conductor bogota'.",
                category: "empleos",
                parameters: job_search_parameters,
            },
        );

        tools.insert(
            ToolName::BusquedaWebGoogle,
            ToolMetadata {
                name: ToolName::BusquedaWebGoogle,
                description: "Realiza una búsqueda web general en Google y devuelve un resumen \
                              con la respuesta destacada, información clave y los primeros \
                              resultados orgánicos.",
                category: "web",
                parameters: web_search_parameters,
            },
        );

        Self { tools }
    }

    /// Get all tools as MCP tool definitions
    pub fn mcp_definitions(&self) -> Vec<McpToolDefinition> {
        let mut definitions: Vec<McpToolDefinition> = self
            .tools
            .values()
            .map(|t| McpToolDefinition {
                name: t.name.to_string(),
                description: t.description.to_string(),
                input_schema: (t.parameters)(),
                category: Some(t.category.to_string()),
            })
            .collect();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        definitions
    }

    /// Get metadata by string name
    #[allow(dead_code)]
    pub fn get_by_str(&self, name: &str) -> Option<&ToolMetadata> {
        ToolName::from_str(name)
            .ok()
            .and_then(|n| self.tools.get(&n))
    }

    /// Number of registered tools
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if registry is empty
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global singleton registry instance
pub static REGISTRY: LazyLock<ToolRegistry> = LazyLock::new(ToolRegistry::new);

/// MCP tool definition structure (for output generation)
#[derive(Debug, Clone, Serialize)]
pub struct McpToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
    /// Tool category for organizational purposes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

fn job_search_parameters() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "consulta": {
                "type": "string",
                "description": "La consulta de búsqueda EXACTA. Debe ser lo más limpia \
                                posible, incluyendo puesto y ciudad. EVITA palabras de \
                                relleno como 'busca', 'quiero', 'para', 'en'. Ejemplos \
                                correctos: 'vendedor Cúcuta', 'desarrollador remoto', \
                                'conductor Bogota'."
            }
        },
        "required": ["consulta"]
    })
}

fn web_search_parameters() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "consulta": {
                "type": "string",
                "description": "El texto a buscar en la web, tal como lo escribiría un \
                                usuario en el buscador."
            }
        },
        "required": ["consulta"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_name_string_conversion() {
        assert_eq!(
            ToolName::BuscarEmpleosListaCruda.to_string(),
            "buscar_empleos_lista_cruda"
        );
        assert_eq!(
            ToolName::BusquedaWebGoogle.to_string(),
            "busqueda_web_google"
        );
    }

    #[test]
    fn test_tool_name_from_string() {
        assert_eq!(
            ToolName::from_str("buscar_empleos_lista_cruda").unwrap(),
            ToolName::BuscarEmpleosListaCruda
        );
        assert_eq!(
            ToolName::from_str("busqueda_web_google").unwrap(),
            ToolName::BusquedaWebGoogle
        );
        assert!(ToolName::from_str("unknown_tool").is_err());
    }

    #[test]
    fn test_registry_lists_both_tools() {
        let definitions = REGISTRY.mcp_definitions();
        assert_eq!(definitions.len(), 2);
        assert_eq!(REGISTRY.len(), 2);

        for definition in &definitions {
            let schema = &definition.input_schema;
            assert_eq!(schema["required"][0], "consulta");
            assert_eq!(schema["properties"]["consulta"]["type"], "string");
        }
    }

    #[test]
    fn test_registry_lookup_by_string() {
        assert!(REGISTRY.get_by_str("buscar_empleos_lista_cruda").is_some());
        assert!(REGISTRY.get_by_str("no_such_tool").is_none());
    }
}
