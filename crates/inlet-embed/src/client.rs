//! Embedding service HTTP client.

use crate::embedder::Embedder;
use crate::error::{EmbedError, EmbedResult};
use crate::types::{EmbeddingRequest, EmbeddingResponse};
use async_trait::async_trait;
use inlet_config::EmbeddingConfig;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Client for the embedding-generation API.
#[derive(Clone)]
pub struct EmbeddingClient {
    client: Client,
    base: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl EmbeddingClient {
    /// Create a new client from configuration and an API key.
    pub fn from_config(config: &EmbeddingConfig, api_key: impl Into<String>) -> EmbedResult<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds);

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(EmbedError::Http)?;

        Ok(Self {
            client,
            base: config.api_base.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: config.model.clone(),
            timeout,
        })
    }
}

#[async_trait]
impl Embedder for EmbeddingClient {
    async fn embed(&self, text: &str) -> EmbedResult<Vec<f32>> {
        let url = format!("{}/embeddings", self.base);
        debug!(
            "Generating embedding with model {} for text length {}",
            self.model,
            text.len()
        );

        let request = EmbeddingRequest {
            model: self.model.clone(),
            input: text.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    EmbedError::Unreachable {
                        host: self.base.clone(),
                    }
                } else if e.is_timeout() {
                    EmbedError::Timeout {
                        seconds: self.timeout.as_secs(),
                    }
                } else {
                    EmbedError::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(EmbedError::ApiError {
                status: status.as_u16(),
                message: text,
            });
        }

        let embedding_response: EmbeddingResponse = response.json().await?;
        let embedding = embedding_response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or(EmbedError::EmptyResponse)?;

        info!("Generated embedding with {} dimensions", embedding.len());
        Ok(embedding)
    }
}
