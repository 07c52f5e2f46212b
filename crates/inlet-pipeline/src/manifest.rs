//! Manifest of processed documents.
//!
//! The sole persisted state: a JSON map from document id to the
//! last-processed record. Loaded once at run start, saved once at run
//! end. An entry exists iff that document has been fully processed at
//! least once; entries are never deleted, even when the remote document
//! disappears.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

/// Processing record for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    /// Remote modification timestamp as the store reported it, compared
    /// by exact string inequality on the next run.
    #[serde(rename = "modifiedTime")]
    pub modified_time: String,
    /// Local timestamp of the successful processing.
    #[serde(rename = "processedAt")]
    pub processed_at: DateTime<Utc>,
}

/// Map from document id to its processing record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<String, ManifestEntry>,
}

impl Manifest {
    /// Load the manifest from disk. A missing or unreadable file yields
    /// an empty manifest with a warning; loading is never fatal.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Could not load manifest file: {}", e);
                return Self::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(manifest) => manifest,
            Err(e) => {
                warn!("Could not parse manifest file: {}", e);
                Self::default()
            }
        }
    }

    /// Save the manifest as pretty-printed JSON. Best effort: a single
    /// whole-file write with no crash-safety guarantee.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        info!("Manifest saved with {} entries", self.len());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ManifestEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ManifestEntry)> {
        self.entries.iter()
    }

    /// Write or overwrite a document's record.
    pub fn record(&mut self, id: impl Into<String>, entry: ManifestEntry) {
        self.entries.insert(id.into(), entry);
    }
}
