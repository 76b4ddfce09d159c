//! Document version entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use drafthub_core::types::id::{DocumentId, VersionId};

/// An immutable snapshot of a document's content.
///
/// A version is created exactly once and never updated or deleted.
/// Timestamps are strictly increasing within one document's history and
/// serialize as integer milliseconds since the Unix epoch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileVersion {
    /// Unique version identifier.
    pub id: VersionId,
    /// The document this version belongs to.
    pub document_id: DocumentId,
    /// Full text snapshot of the document at this point.
    pub content: String,
    /// When this version was created.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    /// Opaque identity reference of who created this version.
    pub author: String,
    /// Optional comment describing the change.
    pub message: Option<String>,
}

impl FileVersion {
    /// A metadata-only copy with the content omitted.
    ///
    /// History listings return many versions at once; shipping every full
    /// snapshot in a list response is wasteful, so listings carry empty
    /// content and callers fetch a single version when they need the text.
    pub fn without_content(&self) -> Self {
        Self {
            content: String::new(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_serializes_as_millis() {
        let version = FileVersion {
            id: VersionId::new(),
            document_id: DocumentId::new(),
            content: "hello".to_string(),
            timestamp: DateTime::from_timestamp_millis(1_700_000_000_123).expect("valid"),
            author: "alice".to_string(),
            message: None,
        };
        let json = serde_json::to_value(&version).expect("serialize");
        assert_eq!(json["timestamp"], 1_700_000_000_123_i64);
    }

    #[test]
    fn test_without_content_keeps_metadata() {
        let version = FileVersion {
            id: VersionId::new(),
            document_id: DocumentId::new(),
            content: "big body".to_string(),
            timestamp: Utc::now(),
            author: "bob".to_string(),
            message: Some("edit".to_string()),
        };
        let slim = version.without_content();
        assert_eq!(slim.id, version.id);
        assert_eq!(slim.message.as_deref(), Some("edit"));
        assert!(slim.content.is_empty());
    }
}
