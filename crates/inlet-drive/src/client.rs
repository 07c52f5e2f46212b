//! File-store HTTP client.

use crate::error::{StoreError, StoreResult};
use crate::store::FileStore;
use crate::types::FileListResponse;
use async_trait::async_trait;
use inlet_config::DriveConfig;
use inlet_core::{RemoteDocument, RemoteFolder, FOLDER_MEDIA_TYPE, SUPPORTED_MEDIA_TYPES};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const DOCUMENT_FIELDS: &str = "nextPageToken, files(id, name, mimeType, modifiedTime, size, parents)";
const FOLDER_FIELDS: &str = "nextPageToken, files(id, name)";

/// Client for a Drive-style file-store REST API.
#[derive(Clone)]
pub struct DriveClient {
    client: Client,
    base: String,
    token: String,
    timeout: Duration,
}

impl DriveClient {
    /// Create a new client from configuration and a bearer token.
    pub fn from_config(config: &DriveConfig, token: impl Into<String>) -> StoreResult<Self> {
        Self::new(&config.api_base, token)
    }

    pub fn new(base: impl Into<String>, token: impl Into<String>) -> StoreResult<Self> {
        let base = base.into();
        let timeout = Duration::from_secs(120);

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(StoreError::Http)?;

        Ok(Self {
            client,
            base: base.trim_end_matches('/').to_string(),
            token: token.into(),
            timeout,
        })
    }

    fn map_send_error(&self, e: reqwest::Error) -> StoreError {
        if e.is_connect() {
            StoreError::Unreachable {
                host: self.base.clone(),
            }
        } else if e.is_timeout() {
            StoreError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            StoreError::Http(e)
        }
    }

    /// Fetch every page of a listing query.
    async fn list_all(&self, query: &str, fields: &str) -> StoreResult<FileListResponse> {
        let url = format!("{}/files", self.base);
        let mut merged = FileListResponse {
            files: Vec::new(),
            next_page_token: None,
        };
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(&url)
                .bearer_auth(&self.token)
                .query(&[("q", query), ("fields", fields)]);

            if let Some(ref token) = page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let response = request.send().await.map_err(|e| self.map_send_error(e))?;

            if !response.status().is_success() {
                let status = response.status().as_u16();
                let text = response.text().await.unwrap_or_default();
                return Err(StoreError::ApiError {
                    status,
                    message: text,
                });
            }

            let page: FileListResponse = response.json().await?;
            merged.files.extend(page.files);

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        Ok(merged)
    }
}

#[async_trait]
impl FileStore for DriveClient {
    async fn list_subfolders(&self, folder_id: &str) -> StoreResult<Vec<RemoteFolder>> {
        let query = format!(
            "'{}' in parents and mimeType='{}' and trashed=false",
            folder_id, FOLDER_MEDIA_TYPE
        );
        debug!("Listing subfolders of {}", folder_id);

        let listing = self.list_all(&query, FOLDER_FIELDS).await?;
        Ok(listing
            .files
            .into_iter()
            .map(|resource| resource.into_folder())
            .collect())
    }

    async fn list_documents(&self, folder_id: &str) -> StoreResult<Vec<RemoteDocument>> {
        let type_query = SUPPORTED_MEDIA_TYPES
            .iter()
            .map(|media_type| format!("mimeType='{}'", media_type))
            .collect::<Vec<_>>()
            .join(" or ");
        let query = format!(
            "'{}' in parents and trashed=false and ({})",
            folder_id, type_query
        );
        debug!("Listing documents in {}", folder_id);

        let listing = self.list_all(&query, DOCUMENT_FIELDS).await?;
        Ok(listing
            .files
            .into_iter()
            .map(|resource| resource.into_document())
            .collect())
    }

    async fn download(&self, file_id: &str) -> StoreResult<Vec<u8>> {
        let url = format!("{}/files/{}", self.base, file_id);
        debug!("Downloading {}", file_id);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[("alt", "media")])
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(StoreError::ApiError {
                status,
                message: text,
            });
        }

        let bytes = response.bytes().await.map_err(StoreError::Http)?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = DriveConfig::default();
        let client = DriveClient::from_config(&config, "token");
        assert!(client.is_ok());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = DriveClient::new("https://example.com/api/", "token").unwrap();
        assert_eq!(client.base, "https://example.com/api");
    }
}
