//! Static configuration for the service.
//! Loaded once at startup from an optional config file plus CUMBRE-prefixed
//! environment variables; changing any of these requires a restart.

use serde::Deserialize;

use crate::error::ServiceError;

/// Static configuration loaded at startup
#[derive(Debug, Clone, Deserialize)]
pub struct StaticConfig {
    #[serde(default = "default_server")]
    pub server: ServerConfig,

    #[serde(default = "default_jobs")]
    pub jobs: JobsConfig,

    #[serde(default = "default_serper")]
    pub serper: SerperConfig,

    #[serde(default = "default_mcp")]
    pub mcp: McpConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Outbound job-listing search API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JobsConfig {
    #[serde(default = "default_jobs_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Fixed page size sent as the `limit` parameter; only the first page
    /// is ever requested.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

/// Outbound web-search provider (Serper) configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SerperConfig {
    /// API key for the provider. Mandatory: there is no default and startup
    /// fails when it is absent.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_serper_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// MCP server mounting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct McpConfig {
    #[serde(default = "default_mcp_enabled")]
    pub enabled: bool,

    #[serde(default = "default_mcp_path")]
    pub path: String,
}

impl StaticConfig {
    /// Validate settings that have no safe default.
    pub fn validate(&self) -> Result<(), ServiceError> {
        match &self.serper.api_key {
            Some(key) if !key.trim().is_empty() => Ok(()),
            _ => Err(ServiceError::Config {
                message: "serper.api_key is required (set CUMBRE__SERPER__API_KEY)".to_string(),
            }),
        }
    }
}

// ==================== Default Value Functions ====================

pub(crate) fn default_server() -> ServerConfig {
    ServerConfig {
        host: default_host(),
        port: default_port(),
    }
}

pub(crate) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(crate) fn default_port() -> u16 {
    8080
}

pub(crate) fn default_jobs() -> JobsConfig {
    JobsConfig {
        base_url: default_jobs_base_url(),
        timeout_secs: default_timeout_secs(),
        page_size: default_page_size(),
    }
}

pub(crate) fn default_jobs_base_url() -> String {
    "https://api-search.cumbre.icu".to_string()
}

pub(crate) fn default_timeout_secs() -> u64 {
    10
}

pub(crate) fn default_page_size() -> u32 {
    20
}

pub(crate) fn default_serper() -> SerperConfig {
    SerperConfig {
        api_key: None,
        base_url: default_serper_base_url(),
        timeout_secs: default_timeout_secs(),
    }
}

pub(crate) fn default_serper_base_url() -> String {
    "https://google.serper.dev".to_string()
}

pub(crate) fn default_mcp() -> McpConfig {
    McpConfig {
        enabled: default_mcp_enabled(),
        path: default_mcp_path(),
    }
}

pub(crate) fn default_mcp_enabled() -> bool {
    true
}

pub(crate) fn default_mcp_path() -> String {
    "/mcp".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: Option<&str>) -> StaticConfig {
        StaticConfig {
            server: default_server(),
            jobs: default_jobs(),
            serper: SerperConfig {
                api_key: key.map(|k| k.to_string()),
                base_url: default_serper_base_url(),
                timeout_secs: default_timeout_secs(),
            },
            mcp: default_mcp(),
        }
    }

    #[test]
    fn test_validate_requires_api_key() {
        assert!(config_with_key(None).validate().is_err());
        assert!(config_with_key(Some("   ")).validate().is_err());
        assert!(config_with_key(Some("sk-test")).validate().is_ok());
    }

    #[test]
    fn test_defaults() {
        let jobs = default_jobs();
        assert_eq!(jobs.base_url, "https://api-search.cumbre.icu");
        assert_eq!(jobs.timeout_secs, 10);
        assert_eq!(jobs.page_size, 20);

        let mcp = default_mcp();
        assert!(mcp.enabled);
        assert_eq!(mcp.path, "/mcp");
    }
}
