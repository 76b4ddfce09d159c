//! Two-sided version comparison.
//!
//! Resolves each side to a line sequence (a stored version, the current
//! head, or a caller-supplied draft), then delegates to the diff engine.
//! Either side exceeding the configured line or byte ceiling degrades the
//! answer to a coarse changed/unchanged result instead of running the
//! full alignment.

use serde::{Deserialize, Serialize};
use tracing::debug;

use drafthub_core::result::AppResult;
use drafthub_core::types::id::{DocumentId, VersionId};
use drafthub_diff::{diff, CompareOutcome, ComparisonReport};

use crate::history::service::HistoryService;

/// One side of a comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompareSide {
    /// A stored version.
    Version {
        /// The version to load.
        version_id: VersionId,
    },
    /// The latest persisted version.
    Current,
    /// A not-yet-committed draft, already split into lines by the caller.
    Draft {
        /// The draft's lines.
        lines: Vec<String>,
    },
}

impl HistoryService {
    /// Compares two sides of a document's content.
    pub async fn compare(
        &self,
        document_id: DocumentId,
        side_a: CompareSide,
        side_b: CompareSide,
    ) -> AppResult<CompareOutcome> {
        let old_lines = self.resolve_side(document_id, side_a).await?;
        let new_lines = self.resolve_side(document_id, side_b).await?;

        if self.exceeds_ceiling(&old_lines) || self.exceeds_ceiling(&new_lines) {
            debug!(
                document_id = %document_id,
                old_lines = old_lines.len(),
                new_lines = new_lines.len(),
                "Diff input over size ceiling, returning coarse result"
            );
            return Ok(CompareOutcome::Coarse {
                changed: old_lines != new_lines,
            });
        }

        let report = ComparisonReport::from_entries(diff(&old_lines, &new_lines));
        Ok(CompareOutcome::Full(report))
    }

    async fn resolve_side(
        &self,
        document_id: DocumentId,
        side: CompareSide,
    ) -> AppResult<Vec<String>> {
        match side {
            CompareSide::Version { version_id } => {
                let version = self.get_version(document_id, version_id).await?;
                Ok(split_lines(&version.content))
            }
            CompareSide::Current => {
                let head = self.latest_version(document_id).await?;
                Ok(split_lines(&head.content))
            }
            CompareSide::Draft { lines } => Ok(lines),
        }
    }

    fn exceeds_ceiling(&self, lines: &[String]) -> bool {
        if lines.len() > self.config().max_diff_lines {
            return true;
        }
        let bytes: usize = lines.iter().map(String::len).sum();
        bytes > self.config().max_diff_bytes
    }
}

/// Normalize line endings and split into lines.
///
/// Empty content yields no lines; a trailing newline yields a trailing
/// empty line, so "a\n" and "a" compare as different.
pub fn split_lines(content: &str) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }
    content
        .replace("\r\n", "\n")
        .split('\n')
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use drafthub_core::config::history::HistoryConfig;
    use drafthub_core::traits::notifier::NullNotifier;
    use drafthub_diff::DiffEntry;
    use drafthub_store::MemoryVersionStore;

    fn make_service(config: HistoryConfig) -> HistoryService {
        HistoryService::new(
            Arc::new(MemoryVersionStore::new(&config)),
            Arc::new(NullNotifier),
            config,
        )
    }

    #[test]
    fn test_split_lines_normalizes_crlf() {
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
        assert_eq!(split_lines(""), Vec::<String>::new());
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
    }

    #[tokio::test]
    async fn test_compare_two_versions() {
        let service = make_service(HistoryConfig::default());
        let document_id = DocumentId::new();
        let v1 = service
            .create_version(document_id, "A\nB\nC".to_string(), "alice".to_string(), None)
            .await
            .unwrap();
        let v2 = service
            .create_version(document_id, "A\nX\nC".to_string(), "alice".to_string(), None)
            .await
            .unwrap();

        let outcome = service
            .compare(
                document_id,
                CompareSide::Version { version_id: v1.id },
                CompareSide::Version { version_id: v2.id },
            )
            .await
            .unwrap();
        let CompareOutcome::Full(report) = outcome else {
            panic!("expected full report");
        };
        assert_eq!(report.modifications, 1);
        assert_eq!(report.additions, 0);
        assert_eq!(report.deletions, 0);
        assert!(matches!(
            &report.diff[1],
            DiffEntry::Modify { old_content, content, .. }
                if old_content == "B" && content == "X"
        ));
    }

    #[tokio::test]
    async fn test_compare_against_current() {
        let service = make_service(HistoryConfig::default());
        let document_id = DocumentId::new();
        let v1 = service
            .create_version(document_id, "A".to_string(), "alice".to_string(), None)
            .await
            .unwrap();
        service
            .create_version(document_id, "A\nB".to_string(), "alice".to_string(), None)
            .await
            .unwrap();

        let outcome = service
            .compare(
                document_id,
                CompareSide::Version { version_id: v1.id },
                CompareSide::Current,
            )
            .await
            .unwrap();
        let CompareOutcome::Full(report) = outcome else {
            panic!("expected full report");
        };
        assert_eq!(report.additions, 1);
        assert_eq!(report.deletions, 0);
    }

    #[tokio::test]
    async fn test_compare_with_draft() {
        let service = make_service(HistoryConfig::default());
        let document_id = DocumentId::new();
        service
            .create_version(document_id, "A\nB".to_string(), "alice".to_string(), None)
            .await
            .unwrap();

        let outcome = service
            .compare(
                document_id,
                CompareSide::Current,
                CompareSide::Draft {
                    lines: vec!["A".to_string()],
                },
            )
            .await
            .unwrap();
        let CompareOutcome::Full(report) = outcome else {
            panic!("expected full report");
        };
        assert_eq!(report.deletions, 1);
    }

    #[tokio::test]
    async fn test_self_compare_idempotence() {
        let service = make_service(HistoryConfig::default());
        let document_id = DocumentId::new();
        let v1 = service
            .create_version(
                document_id,
                "one\ntwo\nthree".to_string(),
                "alice".to_string(),
                None,
            )
            .await
            .unwrap();

        let outcome = service
            .compare(
                document_id,
                CompareSide::Version { version_id: v1.id },
                CompareSide::Version { version_id: v1.id },
            )
            .await
            .unwrap();
        let CompareOutcome::Full(report) = outcome else {
            panic!("expected full report");
        };
        assert!(!report.has_changes());
        assert_eq!(report.diff.len(), 3);
        assert!(report.diff.iter().all(DiffEntry::is_unchanged));
    }

    #[tokio::test]
    async fn test_unknown_version_is_not_found() {
        let service = make_service(HistoryConfig::default());
        let document_id = DocumentId::new();
        service
            .create_version(document_id, "A".to_string(), "alice".to_string(), None)
            .await
            .unwrap();
        let err = service
            .compare(
                document_id,
                CompareSide::Version {
                    version_id: VersionId::new(),
                },
                CompareSide::Current,
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, drafthub_core::error::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_oversized_input_degrades_to_coarse() {
        let config = HistoryConfig {
            max_diff_lines: 4,
            ..HistoryConfig::default()
        };
        let service = make_service(config);
        let document_id = DocumentId::new();
        service
            .create_version(
                document_id,
                "1\n2\n3\n4\n5\n6".to_string(),
                "alice".to_string(),
                None,
            )
            .await
            .unwrap();

        let outcome = service
            .compare(
                document_id,
                CompareSide::Current,
                CompareSide::Draft {
                    lines: vec!["other".to_string()],
                },
            )
            .await
            .unwrap();
        assert_eq!(outcome, CompareOutcome::Coarse { changed: true });

        // Equal oversized content reports unchanged.
        let outcome = service
            .compare(document_id, CompareSide::Current, CompareSide::Current)
            .await
            .unwrap();
        assert_eq!(outcome, CompareOutcome::Coarse { changed: false });
    }

    #[tokio::test]
    async fn test_byte_ceiling_triggers_coarse() {
        let config = HistoryConfig {
            max_diff_bytes: 16,
            ..HistoryConfig::default()
        };
        let service = make_service(config);
        let document_id = DocumentId::new();
        service
            .create_version(
                document_id,
                "a long enough line of text".to_string(),
                "alice".to_string(),
                None,
            )
            .await
            .unwrap();

        let outcome = service
            .compare(document_id, CompareSide::Current, CompareSide::Current)
            .await
            .unwrap();
        assert!(matches!(outcome, CompareOutcome::Coarse { changed: false }));
    }
}
