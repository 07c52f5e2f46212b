//! Run outcome summary.

use chrono::{DateTime, Utc};

/// Counters describing one ingestion run, returned by the coordinator
/// for the caller to present however it likes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Supported documents visible in the remote tree.
    pub total_remote: usize,
    /// Documents selected as new or modified.
    pub attempted: usize,
    /// Documents fully processed and recorded in the manifest.
    pub succeeded: usize,
    /// Documents that failed a gate or a collaborator call.
    pub failed: usize,
    /// Manifest entry count after the run.
    pub manifest_size: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    /// Fraction of attempted documents that succeeded, 0.0 when nothing
    /// was attempted.
    pub fn success_rate(&self) -> f64 {
        if self.attempted == 0 {
            return 0.0;
        }
        self.succeeded as f64 / self.attempted as f64
    }
}
