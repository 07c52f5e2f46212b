//! Shared pipeline limits and fixed labels.

/// Documents larger than this (declared or downloaded) are rejected.
pub const MAX_DOCUMENT_BYTES: u64 = 50 * 1024 * 1024;

/// A chunk holds at most this many characters of extracted text.
pub const CHUNK_CHAR_LIMIT: usize = 800;

/// Appended to a chunk whose source text exceeded the limit.
pub const TRUNCATION_MARKER: &str = "...";

/// Extracted text shorter than this (trimmed) is not worth indexing.
pub const MIN_TEXT_CHARS: usize = 50;

/// Suffix that marks the one-and-only chunk of a document in vector ids.
pub const SINGLE_CHUNK_SUFFIX: &str = "_single";

/// Pages beyond this are ignored when extracting from a PDF.
pub const MAX_PDF_PAGES: usize = 20;

/// Slides beyond this are ignored when extracting from a slide deck.
pub const MAX_DECK_SLIDES: usize = 50;

/// Wall-clock bound on the legacy word-processor extraction tool.
pub const LEGACY_WORD_TIMEOUT_SECS: u64 = 30;

/// Wall-clock bound on the document-conversion tool for legacy decks.
pub const DECK_CONVERT_TIMEOUT_SECS: u64 = 60;

/// Media type the remote store uses for folders.
pub const FOLDER_MEDIA_TYPE: &str = "application/vnd.google-apps.folder";

/// The five office document formats the pipeline ingests.
pub const SUPPORTED_MEDIA_TYPES: [&str; 5] = [
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/pdf",
    "application/vnd.ms-powerpoint",
    "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    "application/msword",
];
