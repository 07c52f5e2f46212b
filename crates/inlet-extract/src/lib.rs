//! Inlet Extract - Multi-format text extraction with per-format
//! fallback chains.
//!
//! The `Extractor` facade never fails: every strategy catches its own
//! errors and degrades to empty text, so a bad document can never abort
//! an ingestion run.

mod deck;
mod docx;
mod error;
mod legacy;
mod pdf;
mod scraper;

pub use error::{ExtractError, ExtractResult};
pub use scraper::{BinaryScraper, ScraperConfig};

use inlet_core::DocumentFormat;
use tracing::{error, warn};

/// Paths of the external executables used for legacy binary formats.
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Document-conversion tool (legacy slide decks).
    pub soffice: String,
    /// Plain-text extraction tool (legacy word documents).
    pub antiword: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            soffice: "soffice".to_string(),
            antiword: "antiword".to_string(),
        }
    }
}

/// Format-dispatched text extractor.
pub struct Extractor {
    tools: ToolConfig,
    scraper: BinaryScraper,
}

impl Extractor {
    pub fn new(tools: ToolConfig) -> Self {
        Self::with_scraper(tools, ScraperConfig::default())
    }

    pub fn with_scraper(tools: ToolConfig, scraper: ScraperConfig) -> Self {
        Self {
            tools,
            scraper: BinaryScraper::new(scraper),
        }
    }

    /// Extract plain text from document bytes, keyed on the declared
    /// media type. Returns empty text on total failure; never panics or
    /// surfaces an error.
    pub fn extract(&self, content: &[u8], media_type: &str) -> String {
        match DocumentFormat::from_media_type(media_type) {
            DocumentFormat::Docx => docx::extract(content).unwrap_or_else(|e| {
                error!("Error extracting document text: {}", e);
                String::new()
            }),
            DocumentFormat::Pdf => pdf::extract(content).unwrap_or_else(|e| {
                error!("Error extracting PDF text: {}", e);
                String::new()
            }),
            DocumentFormat::ModernDeck => deck::extract(content).unwrap_or_else(|e| {
                error!("Error extracting deck text: {}", e);
                String::new()
            }),
            DocumentFormat::LegacyDeck => {
                // Conversion tool first; the heuristic scrape runs only
                // when that yields no text.
                let text = match legacy::convert_deck(content, &self.tools) {
                    Ok(text) => text,
                    Err(e) => {
                        warn!("Deck conversion failed, trying binary scrape: {}", e);
                        String::new()
                    }
                };
                if text.is_empty() {
                    self.scraper.scrape(content)
                } else {
                    text
                }
            }
            DocumentFormat::LegacyWord => match legacy::extract_doc(content, &self.tools) {
                Ok(text) => text,
                Err(e) => {
                    error!("Error extracting legacy document text: {}", e);
                    String::new()
                }
            },
            DocumentFormat::Unsupported => {
                warn!("Unsupported media type: {}", media_type);
                String::new()
            }
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ToolConfig::default())
    }
}
