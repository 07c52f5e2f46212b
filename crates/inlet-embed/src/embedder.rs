//! Embedder trait seam.

use crate::error::EmbedResult;
use async_trait::async_trait;

/// Text in, fixed-dimension vector out.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> EmbedResult<Vec<f32>>;
}
