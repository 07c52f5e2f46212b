//! Text extraction for modern packaged slide decks.

use crate::error::{ExtractError, ExtractResult};
use inlet_core::MAX_DECK_SLIDES;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use tracing::warn;

/// Extract shape text from the first `MAX_DECK_SLIDES` slides. Each
/// non-blank shape contributes one line prefixed with its 1-based slide
/// number. A slide that fails to read is skipped.
pub(crate) fn extract(content: &[u8]) -> ExtractResult<String> {
    let cursor = Cursor::new(content);
    let mut archive =
        zip::ZipArchive::new(cursor).map_err(|e| ExtractError::Deck(e.to_string()))?;

    // Slide entries are named ppt/slides/slideN.xml; sort numerically.
    let mut slide_names: Vec<(u32, String)> = archive
        .file_names()
        .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
        .filter_map(|name| {
            name.trim_start_matches("ppt/slides/slide")
                .trim_end_matches(".xml")
                .parse::<u32>()
                .ok()
                .map(|number| (number, name.to_string()))
        })
        .collect();
    slide_names.sort();

    let mut text = String::new();
    for (index, (_, name)) in slide_names.into_iter().take(MAX_DECK_SLIDES).enumerate() {
        let slide_number = index + 1;

        let mut xml = String::new();
        match archive.by_name(&name) {
            Ok(mut entry) => {
                if let Err(e) = entry.read_to_string(&mut xml) {
                    warn!("Error reading slide {}: {}", slide_number, e);
                    continue;
                }
            }
            Err(e) => {
                warn!("Error reading slide {}: {}", slide_number, e);
                continue;
            }
        }

        for shape_text in slide_shape_texts(&xml) {
            text.push_str(&format!("Slide {}: {}\n", slide_number, shape_text));
        }
    }

    Ok(text.trim().to_string())
}

/// Collect the text of each shape on a slide. A shape is one text body;
/// its text is the shape's paragraphs joined with newlines. Blank
/// shapes are dropped.
fn slide_shape_texts(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut shapes = Vec::new();
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current_paragraph = String::new();
    let mut in_body = false;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"txBody" => {
                    in_body = true;
                    paragraphs.clear();
                }
                b"p" if in_body => current_paragraph.clear(),
                b"t" if in_body => in_text = true,
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text {
                    if let Ok(text) = e.unescape() {
                        current_paragraph.push_str(&text);
                    }
                }
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" if in_body => {
                    if !current_paragraph.trim().is_empty() {
                        paragraphs.push(current_paragraph.trim().to_string());
                    }
                    current_paragraph.clear();
                }
                b"txBody" => {
                    in_body = false;
                    let shape_text = paragraphs.join("\n");
                    if !shape_text.trim().is_empty() {
                        shapes.push(shape_text.trim().to_string());
                    }
                    paragraphs.clear();
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(_) => break,
            _ => {}
        }
    }

    shapes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn slide_xml(shapes: &[&[&str]]) -> String {
        let mut xml = String::from("<p:sld><p:cSld><p:spTree>");
        for shape in shapes {
            xml.push_str("<p:sp><p:txBody>");
            for paragraph in *shape {
                xml.push_str(&format!("<a:p><a:r><a:t>{}</a:t></a:r></a:p>", paragraph));
            }
            xml.push_str("</p:txBody></p:sp>");
        }
        xml.push_str("</p:spTree></p:cSld></p:sld>");
        xml
    }

    /// Build an in-memory deck archive from slide XML bodies.
    pub(crate) fn build_fixture(slides: &[String]) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            let options = SimpleFileOptions::default();
            for (i, slide) in slides.iter().enumerate() {
                writer
                    .start_file(format!("ppt/slides/slide{}.xml", i + 1), options)
                    .unwrap();
                writer.write_all(slide.as_bytes()).unwrap();
            }
            writer.finish().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn test_shapes_prefixed_with_slide_number() {
        let slides = vec![
            slide_xml(&[&["Title"], &["Body text"]]),
            slide_xml(&[&["Second slide"]]),
        ];
        let bytes = build_fixture(&slides);

        let text = extract(&bytes).unwrap();
        assert_eq!(
            text,
            "Slide 1: Title\nSlide 1: Body text\nSlide 2: Second slide"
        );
    }

    #[test]
    fn test_blank_shapes_dropped() {
        let slides = vec![slide_xml(&[&[""], &["Only content"]])];
        let bytes = build_fixture(&slides);

        let text = extract(&bytes).unwrap();
        assert_eq!(text, "Slide 1: Only content");
    }

    #[test]
    fn test_paragraphs_within_shape_joined() {
        let slides = vec![slide_xml(&[&["Line one", "Line two"]])];
        let bytes = build_fixture(&slides);

        let text = extract(&bytes).unwrap();
        assert_eq!(text, "Slide 1: Line one\nLine two");
    }

    #[test]
    fn test_slides_beyond_cap_are_ignored() {
        let mut slides: Vec<String> = (0..MAX_DECK_SLIDES)
            .map(|i| slide_xml(&[&[&format!("Slide body {}", i + 1)]]))
            .collect();
        slides.push(slide_xml(&[&["BEYOND THE CAP"]]));
        let bytes = build_fixture(&slides);

        let text = extract(&bytes).unwrap();
        assert!(text.contains("Slide body 1"));
        assert!(text.contains(&format!("Slide body {}", MAX_DECK_SLIDES)));
        assert!(!text.contains("BEYOND THE CAP"));
    }

    #[test]
    fn test_garbage_bytes_are_an_error() {
        assert!(extract(b"not a zip archive").is_err());
    }
}
