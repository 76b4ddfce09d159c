//! Document history domain events.

use serde::{Deserialize, Serialize};

use crate::types::id::{DocumentId, VersionId};

/// Events related to a document's version history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DocumentEvent {
    /// A new version snapshot was appended.
    VersionCreated {
        /// The document whose history grew.
        document_id: DocumentId,
        /// The new version's id.
        version_id: VersionId,
    },
    /// The document was rolled back to a historical version.
    RolledBack {
        /// The document that was rolled back.
        document_id: DocumentId,
        /// The new head version created by the rollback.
        new_version_id: VersionId,
        /// The historical version whose content was restored.
        target_version_id: VersionId,
    },
}
