//! The tagged diff entry variant type.
//!
//! Each variant carries exactly the fields valid for it: a `Modify` is
//! the only entry with both sides' content, a `Delete` is the only entry
//! numbered on the old side.

use serde::{Deserialize, Serialize};

/// One line-level operation in an edit script.
///
/// `line_number` is 1-based: new-side for `Add`, `Modify`, and
/// `Unchanged`; old-side for `Delete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiffEntry {
    /// A line present only in the new content.
    Add {
        /// New-side line number.
        line_number: usize,
        /// The added line.
        content: String,
    },
    /// A line present only in the old content.
    Delete {
        /// Old-side line number.
        line_number: usize,
        /// The removed line.
        content: String,
    },
    /// A line that changed in place (a paired delete + add).
    Modify {
        /// New-side line number.
        line_number: usize,
        /// The line as it was.
        old_content: String,
        /// The line as it is now.
        content: String,
    },
    /// A line common to both sides.
    Unchanged {
        /// New-side line number.
        line_number: usize,
        /// The shared line.
        content: String,
    },
}

impl DiffEntry {
    /// The entry's line number on the side it is rendered on.
    pub fn line_number(&self) -> usize {
        match self {
            Self::Add { line_number, .. }
            | Self::Delete { line_number, .. }
            | Self::Modify { line_number, .. }
            | Self::Unchanged { line_number, .. } => *line_number,
        }
    }

    /// The new-side content (old-side for `Delete`).
    pub fn content(&self) -> &str {
        match self {
            Self::Add { content, .. }
            | Self::Delete { content, .. }
            | Self::Modify { content, .. }
            | Self::Unchanged { content, .. } => content,
        }
    }

    /// Whether this entry represents no change.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged { .. })
    }
}
