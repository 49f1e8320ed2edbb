//! Error types for the Cumbre search API.

#[derive(Debug, thiserror::Error)]
pub enum JobSearchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },
}
