//! Error types for the ingestion pipeline.

use thiserror::Error;

/// Errors that can occur during an ingestion run.
///
/// Per-document failures never surface as errors; they are logged and
/// counted inside the processor. These variants exist for the fallible
/// collaborator calls the processor performs internally.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("File store error: {0}")]
    Store(#[from] inlet_drive::StoreError),

    #[error("Embedding error: {0}")]
    Embed(#[from] inlet_embed::EmbedError),

    #[error("Index error: {0}")]
    Index(#[from] inlet_index::IndexError),
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
