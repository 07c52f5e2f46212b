//! Inlet Pipeline - Incremental ingestion core.
//!
//! Manifest-based change detection, the per-document processing
//! pipeline, and the run coordinator that drives them end to end.

mod coordinator;
mod error;
mod manifest;
mod processor;
mod report;
mod select;
#[cfg(test)]
mod testing;

pub use coordinator::Pipeline;
pub use error::{PipelineError, PipelineResult};
pub use manifest::{Manifest, ManifestEntry};
pub use processor::DocumentProcessor;
pub use report::RunReport;
pub use select::{select_candidates, should_skip};
