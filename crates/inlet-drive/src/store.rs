//! File-store trait seam.

use crate::error::StoreResult;
use async_trait::async_trait;
use inlet_core::{RemoteDocument, RemoteFolder};

/// Read-only access to the remote file store.
///
/// The concrete implementation is `DriveClient`; tests substitute mocks.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// List the immediate subfolders of a folder.
    async fn list_subfolders(&self, folder_id: &str) -> StoreResult<Vec<RemoteFolder>>;

    /// List the supported documents directly inside a folder.
    async fn list_documents(&self, folder_id: &str) -> StoreResult<Vec<RemoteDocument>>;

    /// Download the full byte content of a document.
    async fn download(&self, file_id: &str) -> StoreResult<Vec<u8>>;
}
