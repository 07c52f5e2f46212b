//! Text extraction for paginated documents.

use crate::error::{ExtractError, ExtractResult};
use inlet_core::MAX_PDF_PAGES;
use lopdf::Document;
use tracing::warn;

/// Extract text from the first `MAX_PDF_PAGES` pages. Later pages are
/// ignored even when present. A page that fails to extract is skipped;
/// only a document that fails to parse at all is an error.
pub(crate) fn extract(content: &[u8]) -> ExtractResult<String> {
    let doc = Document::load_mem(content).map_err(|e| ExtractError::Pdf(e.to_string()))?;

    let mut text = String::new();
    for (&page_number, _) in doc.get_pages().iter().take(MAX_PDF_PAGES) {
        match doc.extract_text(&[page_number]) {
            Ok(page_text) => {
                let page_text = page_text.trim();
                if !page_text.is_empty() {
                    text.push_str(page_text);
                    text.push('\n');
                }
            }
            Err(e) => {
                warn!("Error extracting page {}: {}", page_number, e);
            }
        }
    }

    Ok(text.trim().to_string())
}
