//! Error types for text extraction.
//!
//! These never cross the `Extractor` facade; every strategy degrades to
//! empty text after logging.

use thiserror::Error;

/// Errors that can occur inside an extraction strategy.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document parse error: {0}")]
    Docx(String),

    #[error("PDF parse error: {0}")]
    Pdf(String),

    #[error("Deck archive error: {0}")]
    Deck(String),

    #[error("{tool} timed out after {seconds} seconds")]
    ToolTimeout { tool: &'static str, seconds: u64 },

    #[error("{tool} exited with status {status}")]
    ToolFailed { tool: &'static str, status: i32 },
}

/// Result type for extraction strategies.
pub type ExtractResult<T> = Result<T, ExtractError>;
