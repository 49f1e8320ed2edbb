//! Error types for the Serper search API.

#[derive(Debug, thiserror::Error)]
pub enum WebSearchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },
}
