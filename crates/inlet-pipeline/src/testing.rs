//! Mock collaborators shared by the pipeline tests.

use async_trait::async_trait;
use inlet_core::{RemoteDocument, RemoteFolder};
use inlet_drive::{FileStore, StoreError, StoreResult};
use inlet_embed::{EmbedError, EmbedResult, Embedder};
use inlet_index::{IndexError, IndexResult, VectorIndex, VectorRecord};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory file store. Folders, documents, and content are seeded up
/// front; listings for ids in the failing set return an API error.
#[derive(Default)]
pub struct MockStore {
    subfolders: Mutex<HashMap<String, Vec<RemoteFolder>>>,
    documents: Mutex<HashMap<String, Vec<RemoteDocument>>>,
    contents: Mutex<HashMap<String, Vec<u8>>>,
    failing_folders: Mutex<HashSet<String>>,
    download_calls: AtomicUsize,
}

impl MockStore {
    pub fn with_content(file_id: &str, content: Vec<u8>) -> Self {
        let store = Self::default();
        store.set_content(file_id, content);
        store
    }

    pub fn add_subfolder(&self, parent_id: &str, folder: RemoteFolder) {
        self.subfolders
            .lock()
            .unwrap()
            .entry(parent_id.to_string())
            .or_default()
            .push(folder);
    }

    pub fn add_document(&self, folder_id: &str, doc: RemoteDocument) {
        self.documents
            .lock()
            .unwrap()
            .entry(folder_id.to_string())
            .or_default()
            .push(doc);
    }

    pub fn set_content(&self, file_id: &str, content: Vec<u8>) {
        self.contents
            .lock()
            .unwrap()
            .insert(file_id.to_string(), content);
    }

    pub fn fail_listings_for(&self, folder_id: &str) {
        self.failing_folders
            .lock()
            .unwrap()
            .insert(folder_id.to_string());
    }

    pub fn download_calls(&self) -> usize {
        self.download_calls.load(Ordering::SeqCst)
    }

    fn check_failing(&self, folder_id: &str) -> StoreResult<()> {
        if self.failing_folders.lock().unwrap().contains(folder_id) {
            return Err(StoreError::ApiError {
                status: 500,
                message: format!("listing failed for {}", folder_id),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl FileStore for MockStore {
    async fn list_subfolders(&self, folder_id: &str) -> StoreResult<Vec<RemoteFolder>> {
        self.check_failing(folder_id)?;
        Ok(self
            .subfolders
            .lock()
            .unwrap()
            .get(folder_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_documents(&self, folder_id: &str) -> StoreResult<Vec<RemoteDocument>> {
        self.check_failing(folder_id)?;
        Ok(self
            .documents
            .lock()
            .unwrap()
            .get(folder_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn download(&self, file_id: &str) -> StoreResult<Vec<u8>> {
        self.download_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .contents
            .lock()
            .unwrap()
            .get(file_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// Embedder returning a fixed small vector, or an error when built with
/// `failing()`.
#[derive(Default)]
pub struct MockEmbedder {
    fail: bool,
}

impl MockEmbedder {
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl Embedder for MockEmbedder {
    async fn embed(&self, _text: &str) -> EmbedResult<Vec<f32>> {
        if self.fail {
            return Err(EmbedError::EmptyResponse);
        }
        Ok(vec![0.1, 0.2, 0.3])
    }
}

/// Vector index that records every upserted batch.
#[derive(Default)]
pub struct MockIndex {
    upserted: Mutex<Vec<(VectorRecord, String)>>,
    fail: bool,
}

impl MockIndex {
    pub fn failing() -> Self {
        Self {
            upserted: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn upserted(&self) -> Vec<(VectorRecord, String)> {
        self.upserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl VectorIndex for MockIndex {
    async fn upsert(&self, records: &[VectorRecord], namespace: &str) -> IndexResult<usize> {
        if self.fail {
            return Err(IndexError::ApiError {
                status: 500,
                message: "upsert rejected".to_string(),
            });
        }
        let mut upserted = self.upserted.lock().unwrap();
        for record in records {
            upserted.push((record.clone(), namespace.to_string()));
        }
        Ok(records.len())
    }
}
