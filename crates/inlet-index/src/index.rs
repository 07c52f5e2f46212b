//! Vector index trait seam.

use crate::error::IndexResult;
use crate::types::VectorRecord;
use async_trait::async_trait;

/// Write access to a namespaced vector index.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Upsert a batch of vectors into a namespace. Returns the count
    /// the index reports as written.
    async fn upsert(&self, records: &[VectorRecord], namespace: &str) -> IndexResult<usize>;
}
