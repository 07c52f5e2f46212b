//! Error types for remote file-store operations.

use thiserror::Error;

/// Errors that can occur when talking to the remote file store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Unable to reach the file-store API.
    #[error("File store unreachable at {host}")]
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

/// Result type for file-store operations.
pub type StoreResult<T> = Result<T, StoreError>;
