//! Inlet Core - Domain types shared across the ingestion pipeline.

mod limits;
mod types;

pub use limits::*;
pub use types::*;
