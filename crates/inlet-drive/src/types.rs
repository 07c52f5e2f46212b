//! Wire types for the file-store API.

use inlet_core::{RemoteDocument, RemoteFolder};
use serde::Deserialize;

/// One page of a file listing.
#[derive(Debug, Clone, Deserialize)]
pub struct FileListResponse {
    #[serde(default)]
    pub files: Vec<FileResource>,
    #[serde(default, rename = "nextPageToken")]
    pub next_page_token: Option<String>,
}

/// A file or folder as the API describes it.
#[derive(Debug, Clone, Deserialize)]
pub struct FileResource {
    pub id: String,
    pub name: String,
    #[serde(default, rename = "mimeType")]
    pub mime_type: String,
    #[serde(default, rename = "modifiedTime")]
    pub modified_time: String,
    /// The API reports sizes as decimal strings.
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub parents: Option<Vec<String>>,
}

impl FileResource {
    pub fn into_folder(self) -> RemoteFolder {
        RemoteFolder {
            id: self.id,
            name: self.name,
        }
    }

    pub fn into_document(self) -> RemoteDocument {
        RemoteDocument {
            id: self.id,
            name: self.name,
            media_type: self.mime_type,
            size: self.size.and_then(|s| s.parse().ok()),
            modified_time: self.modified_time,
            parent: self.parents.and_then(|mut p| {
                if p.is_empty() {
                    None
                } else {
                    Some(p.remove(0))
                }
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_page_deserializes() {
        let json = r#"{
            "nextPageToken": "token123",
            "files": [
                {
                    "id": "f1",
                    "name": "report.pdf",
                    "mimeType": "application/pdf",
                    "modifiedTime": "2024-03-01T10:00:00.000Z",
                    "size": "2048",
                    "parents": ["root"]
                }
            ]
        }"#;

        let page: FileListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.next_page_token.as_deref(), Some("token123"));

        let doc = page.files.into_iter().next().unwrap().into_document();
        assert_eq!(doc.id, "f1");
        assert_eq!(doc.size, Some(2048));
        assert_eq!(doc.parent.as_deref(), Some("root"));
    }

    #[test]
    fn test_unparseable_size_becomes_none() {
        let resource = FileResource {
            id: "f1".to_string(),
            name: "x.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            modified_time: String::new(),
            size: Some("not-a-number".to_string()),
            parents: None,
        };
        assert_eq!(resource.into_document().size, None);
    }
}
