//! Error types for embedding operations.

use thiserror::Error;

/// Errors that can occur when requesting embeddings.
#[derive(Error, Debug)]
pub enum EmbedError {
    /// Unable to reach the embedding service.
    #[error("Embedding service unreachable at {host}")]
    Unreachable { host: String },

    /// Request timeout.
    #[error("Request timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    /// API returned an error response.
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The response carried no embedding.
    #[error("Embedding response contained no vectors")]
    EmptyResponse,

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for embedding operations.
pub type EmbedResult<T> = Result<T, EmbedError>;
