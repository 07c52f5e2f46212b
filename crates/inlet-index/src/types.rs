//! Types for vector index requests and responses.

use serde::{Deserialize, Serialize};

/// One vector as sent to the index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorRecord {
    pub id: String,
    pub values: Vec<f32>,
    pub metadata: VectorMetadata,
}

/// Metadata carried alongside a vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorMetadata {
    pub text: String,
    pub file_id: String,
    pub file_name: String,
    pub folder_path: String,
    pub mime_type: String,
    pub modified_time: String,
}

/// Request body for the upsert endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct UpsertRequest<'a> {
    pub vectors: &'a [VectorRecord],
    pub namespace: &'a str,
}

/// Response from the upsert endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertResponse {
    #[serde(default, rename = "upsertedCount")]
    pub upserted_count: usize,
}
