//! Change detection: which remote documents need processing.

use crate::manifest::Manifest;
use inlet_core::RemoteDocument;
use tracing::{debug, info};

/// Names starting with this are editor lock files.
const LOCK_FILE_MARKER: &str = "~$";

/// Names starting with this are hidden files.
const HIDDEN_FILE_MARKER: &str = ".";

/// Low-value name fragments worth skipping in short names.
const LOW_VALUE_SUBSTRINGS: [&str; 6] = ["temp", "tmp", "backup", "copy", "old", "draft"];

/// Names at least this long are never skipped by the substring
/// heuristic; legitimately long names often contain one of the
/// fragments by accident.
const SUBSTRING_GUARD_CHARS: usize = 20;

/// Skip heuristics applied before change classification.
pub fn should_skip(name: &str) -> bool {
    if name.starts_with(LOCK_FILE_MARKER) {
        return true;
    }
    if name.starts_with(HIDDEN_FILE_MARKER) {
        return true;
    }

    if name.chars().count() < SUBSTRING_GUARD_CHARS {
        let lower = name.to_lowercase();
        if LOW_VALUE_SUBSTRINGS
            .iter()
            .any(|fragment| lower.contains(fragment))
        {
            return true;
        }
    }

    false
}

/// Classify the remote listing against the manifest and return the
/// documents to process: all new documents first, then all modified
/// ones, each in remote-listing order. Unchanged documents are
/// excluded. Pure aside from logging.
pub fn select_candidates(remote: &[RemoteDocument], manifest: &Manifest) -> Vec<RemoteDocument> {
    let mut new_documents = Vec::new();
    let mut modified_documents = Vec::new();
    let mut skipped: Vec<&str> = Vec::new();

    for doc in remote {
        if should_skip(&doc.name) {
            skipped.push(&doc.name);
            continue;
        }

        match manifest.get(&doc.id) {
            None => {
                debug!("New document: {}", doc.name);
                new_documents.push(doc.clone());
            }
            Some(entry) if entry.modified_time != doc.modified_time => {
                debug!("Modified document: {}", doc.name);
                modified_documents.push(doc.clone());
            }
            Some(_) => {}
        }
    }

    info!("New documents: {}", new_documents.len());
    info!("Modified documents: {}", modified_documents.len());
    info!("Skipped documents: {}", skipped.len());
    if !skipped.is_empty() {
        let preview = skipped.iter().take(5).cloned().collect::<Vec<_>>().join(", ");
        let more = if skipped.len() > 5 { "..." } else { "" };
        info!("Skipped: {}{}", preview, more);
    }

    new_documents.extend(modified_documents);
    new_documents
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ManifestEntry;
    use chrono::Utc;

    fn doc(id: &str, name: &str, modified_time: &str) -> RemoteDocument {
        RemoteDocument::new(id, name, "application/pdf").with_modified_time(modified_time)
    }

    fn manifest_with(entries: &[(&str, &str)]) -> Manifest {
        let mut manifest = Manifest::default();
        for (id, modified_time) in entries {
            manifest.record(
                *id,
                ManifestEntry {
                    name: format!("{}.pdf", id),
                    modified_time: modified_time.to_string(),
                    processed_at: Utc::now(),
                },
            );
        }
        manifest
    }

    #[test]
    fn test_lock_files_always_skipped() {
        assert!(should_skip("~$report.docx"));
    }

    #[test]
    fn test_hidden_files_always_skipped() {
        assert!(should_skip(".hidden.pdf"));
    }

    #[test]
    fn test_short_low_value_names_skipped() {
        assert!(should_skip("old.pdf"));
        assert!(should_skip("temp_notes.docx"));
        assert!(should_skip("Draft2.ppt"));
    }

    #[test]
    fn test_long_names_not_skipped_by_substring() {
        assert!(!should_skip("old_quarterly_financial_report_2024.pdf"));
        assert!(!should_skip("temporary_site_layouts_archive.docx"));
    }

    #[test]
    fn test_ordinary_names_kept() {
        assert!(!should_skip("report.pdf"));
    }

    #[test]
    fn test_new_documents_selected() {
        let remote = vec![doc("a", "a.pdf", "t1")];
        let candidates = select_candidates(&remote, &Manifest::default());
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, "a");
    }

    #[test]
    fn test_unchanged_documents_excluded() {
        let remote = vec![doc("a", "a.pdf", "t1")];
        let manifest = manifest_with(&[("a", "t1")]);
        assert!(select_candidates(&remote, &manifest).is_empty());
    }

    #[test]
    fn test_modified_documents_selected() {
        let remote = vec![doc("a", "a.pdf", "t2")];
        let manifest = manifest_with(&[("a", "t1")]);
        let candidates = select_candidates(&remote, &manifest);
        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn test_new_before_modified_in_remote_order() {
        let remote = vec![
            doc("m1", "m1.pdf", "t2"),
            doc("n1", "n1.pdf", "t1"),
            doc("m2", "m2.pdf", "t2"),
            doc("n2", "n2.pdf", "t1"),
        ];
        let manifest = manifest_with(&[("m1", "t1"), ("m2", "t1")]);

        let candidates = select_candidates(&remote, &manifest);
        let ids: Vec<&str> = candidates.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["n1", "n2", "m1", "m2"]);
    }

    #[test]
    fn test_selection_is_deterministic() {
        let remote = vec![
            doc("a", "a.pdf", "t2"),
            doc("b", "b.pdf", "t1"),
            doc("c", "~$c.pdf", "t1"),
        ];
        let manifest = manifest_with(&[("a", "t1")]);

        let first = select_candidates(&remote, &manifest);
        let second = select_candidates(&remote, &manifest);
        let first_ids: Vec<&str> = first.iter().map(|d| d.id.as_str()).collect();
        let second_ids: Vec<&str> = second.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(first_ids, second_ids);
        assert_eq!(first_ids, vec!["b", "a"]);
    }

    #[test]
    fn test_skipped_names_never_selected_even_when_new() {
        let remote = vec![doc("x", "~$report.docx", "t1")];
        assert!(select_candidates(&remote, &Manifest::default()).is_empty());
    }
}
