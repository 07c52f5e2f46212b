//! Text extraction for modern packaged word-processing documents.

use crate::error::{ExtractError, ExtractResult};

/// Read every paragraph in document order, join with newlines, trim.
pub(crate) fn extract(content: &[u8]) -> ExtractResult<String> {
    let doc = docx_rs::read_docx(content).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut paragraphs = Vec::new();
    for child in doc.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            let mut text = String::new();
            for child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = child {
                    for child in run.children {
                        if let docx_rs::RunChild::Text(t) = child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            paragraphs.push(text);
        }
    }

    Ok(paragraphs.join("\n").trim().to_string())
}
