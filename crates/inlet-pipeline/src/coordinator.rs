//! Run coordinator: walks the remote tree, selects candidates, and
//! drives the per-document processor.

use crate::manifest::{Manifest, ManifestEntry};
use crate::processor::DocumentProcessor;
use crate::report::RunReport;
use crate::select::select_candidates;
use chrono::Utc;
use inlet_core::RemoteDocument;
use inlet_drive::FileStore;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

/// One incremental ingestion run, end to end.
///
/// A run is never fatal past construction: listing failures skip the
/// affected folder, document failures are counted, and the manifest is
/// saved whatever happened, so partial progress always survives.
pub struct Pipeline {
    store: Arc<dyn FileStore>,
    processor: DocumentProcessor,
    root_folder: String,
    manifest_path: PathBuf,
}

impl Pipeline {
    pub fn new(
        store: Arc<dyn FileStore>,
        processor: DocumentProcessor,
        root_folder: impl Into<String>,
        manifest_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            processor,
            root_folder: root_folder.into(),
            manifest_path: manifest_path.into(),
        }
    }

    /// Walk the folder tree from the root and collect every supported
    /// document. A folder whose listing fails is logged and skipped
    /// along with its subtree.
    async fn collect_documents(&self) -> Vec<RemoteDocument> {
        let mut documents = Vec::new();
        let mut queue = VecDeque::from([self.root_folder.clone()]);

        while let Some(folder_id) = queue.pop_front() {
            match self.store.list_documents(&folder_id).await {
                Ok(mut docs) => documents.append(&mut docs),
                Err(e) => {
                    warn!("Could not list documents in folder {}: {}", folder_id, e);
                    continue;
                }
            }

            match self.store.list_subfolders(&folder_id).await {
                Ok(subfolders) => {
                    for subfolder in subfolders {
                        queue.push_back(subfolder.id);
                    }
                }
                Err(e) => {
                    warn!("Could not list subfolders of {}: {}", folder_id, e);
                }
            }
        }

        documents
    }

    /// Dry run: what would be processed, without touching documents or
    /// the manifest file.
    pub async fn plan(&self) -> Vec<RemoteDocument> {
        let manifest = Manifest::load(&self.manifest_path);
        info!("Manifest loaded with {} entries", manifest.len());

        let remote = self.collect_documents().await;
        info!("Found {} documents in remote tree", remote.len());

        select_candidates(&remote, &manifest)
    }

    /// Run the pipeline: load the manifest, select candidates, process
    /// each in turn, and persist the updated manifest.
    pub async fn run(&self) -> RunReport {
        let started_at = Utc::now();

        let mut manifest = Manifest::load(&self.manifest_path);
        info!("Manifest loaded with {} entries", manifest.len());

        let remote = self.collect_documents().await;
        info!("Found {} documents in remote tree", remote.len());

        let candidates = select_candidates(&remote, &manifest);
        if candidates.is_empty() {
            info!("No new or modified documents, nothing to do");
            let now = Utc::now();
            return RunReport {
                total_remote: remote.len(),
                attempted: 0,
                succeeded: 0,
                failed: 0,
                manifest_size: manifest.len(),
                started_at,
                finished_at: now,
            };
        }

        let mut succeeded = 0;
        let mut failed = 0;
        for (i, doc) in candidates.iter().enumerate() {
            info!("Processing document {}/{}", i + 1, candidates.len());
            if self.processor.process(doc).await {
                manifest.record(
                    &doc.id,
                    ManifestEntry {
                        name: doc.name.clone(),
                        modified_time: doc.modified_time.clone(),
                        processed_at: Utc::now(),
                    },
                );
                succeeded += 1;
            } else {
                failed += 1;
            }
        }

        // Saved even when every document failed, so successes from
        // earlier in the loop are never reprocessed.
        if let Err(e) = manifest.save(&self.manifest_path) {
            error!("Could not save manifest: {}", e);
        }

        RunReport {
            total_remote: remote.len(),
            attempted: candidates.len(),
            succeeded,
            failed,
            manifest_size: manifest.len(),
            started_at,
            finished_at: Utc::now(),
        }
    }
}
