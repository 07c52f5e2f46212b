//! Per-document processing pipeline.

use crate::error::PipelineResult;
use inlet_core::{Chunk, RemoteDocument, MAX_DOCUMENT_BYTES, MIN_TEXT_CHARS, SINGLE_CHUNK_SUFFIX};
use inlet_drive::FileStore;
use inlet_embed::Embedder;
use inlet_extract::Extractor;
use inlet_index::{VectorIndex, VectorMetadata, VectorRecord};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Runs one document through download, extraction, chunking, embedding,
/// and upsert. Every step is a hard gate: a failure skips the rest and
/// the document is retried in full on the next run.
pub struct DocumentProcessor {
    store: Arc<dyn FileStore>,
    embedder: Arc<dyn Embedder>,
    index: Arc<dyn VectorIndex>,
    extractor: Extractor,
    namespace: String,
}

impl DocumentProcessor {
    pub fn new(
        store: Arc<dyn FileStore>,
        embedder: Arc<dyn Embedder>,
        index: Arc<dyn VectorIndex>,
        extractor: Extractor,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            store,
            embedder,
            index,
            extractor,
            namespace: namespace.into(),
        }
    }

    /// Process one document to completion. Never propagates a failure:
    /// any error is logged with the document name and converted to
    /// `false`.
    pub async fn process(&self, doc: &RemoteDocument) -> bool {
        info!("Processing: {}", doc.name);

        match self.try_process(doc).await {
            Ok(processed) => processed,
            Err(e) => {
                error!("Error processing {}: {}", doc.name, e);
                false
            }
        }
    }

    /// The linear gate pipeline. `Ok(false)` means a gate rejected the
    /// document (already logged); `Err` means a collaborator failed.
    async fn try_process(&self, doc: &RemoteDocument) -> PipelineResult<bool> {
        // Declared size gate, before any download. The declared size
        // can be absent or wrong, so the downloaded length is checked
        // again below.
        if let Some(size) = doc.size {
            if size > MAX_DOCUMENT_BYTES {
                warn!("Skipping large document: {} ({} bytes)", doc.name, size);
                return Ok(false);
            }
        }

        let content = self.store.download(&doc.id).await?;
        if content.is_empty() {
            error!("Failed to download {}", doc.name);
            return Ok(false);
        }

        if content.len() as u64 > MAX_DOCUMENT_BYTES {
            warn!(
                "Downloaded document too large: {} ({} bytes)",
                doc.name,
                content.len()
            );
            return Ok(false);
        }
        info!("Downloaded {} bytes", content.len());

        let text = self.extractor.extract(&content, &doc.media_type);
        if text.trim().chars().count() < MIN_TEXT_CHARS {
            warn!("No meaningful text extracted from {}", doc.name);
            return Ok(false);
        }
        info!("Extracted {} characters", text.chars().count());

        let chunk = Chunk::from_text(&text);
        info!("Created chunk with {} characters", chunk.char_len());

        let embedding = self.embedder.embed(&chunk.text).await?;

        let record = VectorRecord {
            id: format!("{}{}", doc.id, SINGLE_CHUNK_SUFFIX),
            values: embedding,
            metadata: VectorMetadata {
                text: chunk.text,
                file_id: doc.id.clone(),
                file_name: doc.name.clone(),
                folder_path: self.namespace.clone(),
                mime_type: doc.media_type.clone(),
                modified_time: doc.modified_time.clone(),
            },
        };

        let upserted = self.index.upsert(&[record], &self.namespace).await?;
        info!("Upserted {} vector(s) to index", upserted);

        Ok(true)
    }
}
