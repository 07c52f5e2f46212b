//! Inlet Index - Vector index client.

mod client;
mod error;
mod index;
mod types;

pub use client::IndexClient;
pub use error::{IndexError, IndexResult};
pub use index::VectorIndex;
pub use types::{VectorMetadata, VectorRecord};
