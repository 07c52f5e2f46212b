//! Core domain types for Inlet.

use crate::limits::{CHUNK_CHAR_LIMIT, TRUNCATION_MARKER};
use serde::{Deserialize, Serialize};

/// Unique identifier for remote documents.
pub type DocumentId = String;

/// Unique identifier for remote folders.
pub type FolderId = String;

/// A folder in the remote file store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteFolder {
    pub id: FolderId,
    pub name: String,
}

/// A document as listed by the remote file store.
///
/// Rebuilt from the remote listing on every run; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteDocument {
    pub id: DocumentId,
    pub name: String,
    pub media_type: String,
    /// Declared size in bytes. May be absent or wrong; the downloaded
    /// length is checked again.
    pub size: Option<u64>,
    /// Modification timestamp on the remote store's clock. Compared by
    /// exact string inequality, never parsed.
    pub modified_time: String,
    pub parent: Option<FolderId>,
}

impl RemoteDocument {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        media_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            media_type: media_type.into(),
            size: None,
            modified_time: String::new(),
            parent: None,
        }
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_modified_time(mut self, modified_time: impl Into<String>) -> Self {
        self.modified_time = modified_time.into();
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}

/// The closed set of extraction strategies, resolved once from the
/// declared media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Modern packaged word-processing document.
    Docx,
    /// Paginated document.
    Pdf,
    /// Modern packaged slide deck.
    ModernDeck,
    /// Legacy binary slide deck.
    LegacyDeck,
    /// Legacy binary word-processing document.
    LegacyWord,
    /// Anything else; extraction yields empty text.
    Unsupported,
}

impl DocumentFormat {
    /// Total mapping from a declared media type to a format kind.
    ///
    /// Match precedence: word-processing, then PDF, then presentation
    /// formats, then legacy word.
    pub fn from_media_type(media_type: &str) -> Self {
        if media_type.contains("wordprocessingml") {
            DocumentFormat::Docx
        } else if media_type.contains("pdf") {
            DocumentFormat::Pdf
        } else if media_type.contains("presentation") || media_type.contains("powerpoint") {
            if media_type.contains("presentationml") {
                DocumentFormat::ModernDeck
            } else {
                DocumentFormat::LegacyDeck
            }
        } else if media_type.contains("msword") {
            DocumentFormat::LegacyWord
        } else {
            DocumentFormat::Unsupported
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Docx => "docx",
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::ModernDeck => "modern-deck",
            DocumentFormat::LegacyDeck => "legacy-deck",
            DocumentFormat::LegacyWord => "legacy-word",
            DocumentFormat::Unsupported => "unsupported",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The single chunk a document contributes to the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub text: String,
    /// True when the source text exceeded the chunk limit.
    pub truncated: bool,
}

impl Chunk {
    /// Truncate extracted text to the chunk limit, counting characters,
    /// never bytes. The marker is appended only when text was dropped.
    pub fn from_text(text: &str) -> Self {
        let char_count = text.chars().count();
        if char_count > CHUNK_CHAR_LIMIT {
            let mut truncated: String = text.chars().take(CHUNK_CHAR_LIMIT).collect();
            truncated.push_str(TRUNCATION_MARKER);
            Self {
                text: truncated,
                truncated: true,
            }
        } else {
            Self {
                text: text.to_string(),
                truncated: false,
            }
        }
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::{CHUNK_CHAR_LIMIT, TRUNCATION_MARKER};

    #[test]
    fn test_format_from_media_type() {
        assert_eq!(
            DocumentFormat::from_media_type(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            ),
            DocumentFormat::Docx
        );
        assert_eq!(
            DocumentFormat::from_media_type("application/pdf"),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_media_type(
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            ),
            DocumentFormat::ModernDeck
        );
        assert_eq!(
            DocumentFormat::from_media_type("application/vnd.ms-powerpoint"),
            DocumentFormat::LegacyDeck
        );
        assert_eq!(
            DocumentFormat::from_media_type("application/msword"),
            DocumentFormat::LegacyWord
        );
        assert_eq!(
            DocumentFormat::from_media_type("image/png"),
            DocumentFormat::Unsupported
        );
    }

    #[test]
    fn test_chunk_under_limit_kept_whole() {
        let chunk = Chunk::from_text("short text");
        assert_eq!(chunk.text, "short text");
        assert!(!chunk.truncated);
    }

    #[test]
    fn test_chunk_at_limit_has_no_marker() {
        let text = "a".repeat(CHUNK_CHAR_LIMIT);
        let chunk = Chunk::from_text(&text);
        assert_eq!(chunk.char_len(), CHUNK_CHAR_LIMIT);
        assert!(!chunk.truncated);
        assert!(!chunk.text.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_chunk_over_limit_truncated_with_marker() {
        let text = "b".repeat(CHUNK_CHAR_LIMIT + 1);
        let chunk = Chunk::from_text(&text);
        assert!(chunk.truncated);
        assert_eq!(
            chunk.char_len(),
            CHUNK_CHAR_LIMIT + TRUNCATION_MARKER.chars().count()
        );
        assert!(chunk.text.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn test_chunk_counts_characters_not_bytes() {
        // Multi-byte characters must not be split.
        let text = "é".repeat(CHUNK_CHAR_LIMIT + 10);
        let chunk = Chunk::from_text(&text);
        assert!(chunk.truncated);
        assert_eq!(
            chunk.char_len(),
            CHUNK_CHAR_LIMIT + TRUNCATION_MARKER.chars().count()
        );
    }

    #[test]
    fn test_document_builder() {
        let doc = RemoteDocument::new("abc123", "report.pdf", "application/pdf")
            .with_size(1024)
            .with_modified_time("2024-03-01T10:00:00.000Z")
            .with_parent("folder1");

        assert_eq!(doc.id, "abc123");
        assert_eq!(doc.size, Some(1024));
        assert_eq!(doc.parent.as_deref(), Some("folder1"));
    }
}
