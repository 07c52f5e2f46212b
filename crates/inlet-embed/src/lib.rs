//! Inlet Embed - Embedding service client.

mod client;
mod embedder;
mod error;
mod types;

pub use client::EmbeddingClient;
pub use embedder::Embedder;
pub use error::{EmbedError, EmbedResult};
