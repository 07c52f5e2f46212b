//! Error types for vector index operations.

use thiserror::Error;

/// Errors that can occur when upserting into the vector index.
#[derive(Error, Debug)]
pub enum IndexError {
    /// Unable to reach the index service.
    #[error("Vector index unreachable at {host}")]
    Unreachable { host: String },

    /// Request timeout.
    #[error("Request timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    /// API returned an error response.
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for index operations.
pub type IndexResult<T> = Result<T, IndexError>;
