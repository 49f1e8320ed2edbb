//! Cumbre job-listing search integration.
//!
//! This module widens a single free-text query into a small set of variants,
//! fans out one request per variant to the Cumbre search API, and merges the
//! returned vacancies into a single deduplicated list.

mod client;
mod error;
mod responses;
mod tool;

pub use client::JobSearchClient;
pub use error::JobSearchError;
pub use responses::VacancyListResponse;
pub use tool::{JobSearchReport, JobSearchTool};

/// Suffix appended to the raw query to also pull remote-friendly listings.
pub(crate) const REMOTE_SUFFIX: &str = "remoto";

/// Expand a raw query into the deduplicated set of variants to issue.
///
/// A blank query expands to nothing. Otherwise the trimmed query and the
/// trimmed query with the remote suffix are both issued; when the two
/// coincide only a single outbound call is made.
pub fn expand_query(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut variants = vec![trimmed.to_string()];
    let remote = format!("{trimmed} {REMOTE_SUFFIX}");
    if !variants.contains(&remote) {
        variants.push(remote);
    }
    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_query_adds_remote_variant() {
        let variants = expand_query("vendedor Cúcuta");
        assert_eq!(variants.len(), 2);
        assert!(variants.contains(&"vendedor Cúcuta".to_string()));
        assert!(variants.contains(&"vendedor Cúcuta remoto".to_string()));
    }

    #[test]
    fn test_expand_query_trims_whitespace() {
        let variants = expand_query("  vendedor Cúcuta ");
        assert_eq!(variants.len(), 2);
        assert!(variants.contains(&"vendedor Cúcuta".to_string()));
        assert!(variants.contains(&"vendedor Cúcuta remoto".to_string()));
    }

    #[test]
    fn test_expand_query_blank_input() {
        assert!(expand_query("").is_empty());
        assert!(expand_query("   \t  ").is_empty());
    }

    #[test]
    fn test_expand_query_no_duplicate_variants() {
        // The remote-suffixed variant is still distinct text here, so both
        // calls go out; the set construction only collapses identical text.
        let variants = expand_query("desarrollador remoto");
        assert_eq!(variants.len(), 2);
        assert!(variants.contains(&"desarrollador remoto".to_string()));
        assert!(variants.contains(&"desarrollador remoto remoto".to_string()));
    }

    #[test]
    fn test_search_url_encoding() {
        let client = JobSearchClient::default();
        let url = client.search_url("vendedor Cúcuta");
        assert!(url.contains("/search/vendedor%20C%C3%BAcuta"));
        assert!(url.contains("limit=20"));
        assert!(url.contains("page=1"));
    }
}
