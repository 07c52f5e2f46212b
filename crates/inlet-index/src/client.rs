//! Vector index HTTP client.

use crate::error::{IndexError, IndexResult};
use crate::index::VectorIndex;
use crate::types::{UpsertRequest, UpsertResponse, VectorRecord};
use async_trait::async_trait;
use inlet_config::IndexConfig;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Client for the vector-index upsert API.
#[derive(Clone)]
pub struct IndexClient {
    client: Client,
    host: String,
    api_key: String,
    timeout: Duration,
}

impl IndexClient {
    /// Create a new client from configuration and an API key.
    pub fn from_config(config: &IndexConfig, api_key: impl Into<String>) -> IndexResult<Self> {
        let timeout = Duration::from_secs(120);

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(IndexError::Http)?;

        Ok(Self {
            client,
            host: config.host.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout,
        })
    }
}

#[async_trait]
impl VectorIndex for IndexClient {
    async fn upsert(&self, records: &[VectorRecord], namespace: &str) -> IndexResult<usize> {
        let url = format!("{}/vectors/upsert", self.host);
        debug!(
            "Upserting {} vector(s) into namespace {}",
            records.len(),
            namespace
        );

        let request = UpsertRequest {
            vectors: records,
            namespace,
        };

        let response = self
            .client
            .post(&url)
            .header("Api-Key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    IndexError::Unreachable {
                        host: self.host.clone(),
                    }
                } else if e.is_timeout() {
                    IndexError::Timeout {
                        seconds: self.timeout.as_secs(),
                    }
                } else {
                    IndexError::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(IndexError::ApiError {
                status: status.as_u16(),
                message: text,
            });
        }

        let upsert_response: UpsertResponse = response.json().await?;
        Ok(upsert_response.upserted_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let mut config = IndexConfig::default();
        config.host = "https://index.example.com/".to_string();
        let client = IndexClient::from_config(&config, "key").unwrap();
        assert_eq!(client.host, "https://index.example.com");
    }
}
