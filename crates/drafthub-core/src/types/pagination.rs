//! Cursor pagination types for history listings.
//!
//! History pages use a cursor (the last-seen version id) rather than a
//! numeric offset so that pages stay stable while new versions are being
//! appended concurrently.

use serde::{Deserialize, Serialize};

use crate::types::id::VersionId;

/// Default page size.
const DEFAULT_PAGE_SIZE: usize = 25;
/// Maximum page size.
const MAX_PAGE_SIZE: usize = 100;

/// Request parameters for cursor-paginated queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CursorRequest {
    /// The last version id seen by the caller; `None` starts at the head.
    #[serde(default)]
    pub cursor: Option<VersionId>,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub limit: Option<usize>,
}

impl CursorRequest {
    /// Create a request starting at the head of the history.
    pub fn first_page(limit: usize) -> Self {
        Self {
            cursor: None,
            limit: Some(limit),
        }
    }

    /// Create a request continuing after the given version id.
    pub fn after(cursor: VersionId, limit: usize) -> Self {
        Self {
            cursor: Some(cursor),
            limit: Some(limit),
        }
    }

    /// The effective page size, clamped to `[1, max]`.
    pub fn effective_limit(&self, max: usize) -> usize {
        self.limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, max.max(1))
    }
}

/// One page of a cursor-paginated result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CursorPage<T: Serialize> {
    /// The items on this page, most recent first.
    pub items: Vec<T>,
    /// Cursor to pass for the next page; `None` when exhausted.
    pub next_cursor: Option<VersionId>,
    /// Whether more items exist beyond this page.
    pub has_more: bool,
}

impl<T: Serialize> CursorPage<T> {
    /// Create a page with a continuation cursor.
    pub fn new(items: Vec<T>, next_cursor: Option<VersionId>) -> Self {
        Self {
            has_more: next_cursor.is_some(),
            items,
            next_cursor,
        }
    }

    /// Create a final (or empty) page.
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_cursor: None,
            has_more: false,
        }
    }
}

fn default_page_size() -> Option<usize> {
    Some(DEFAULT_PAGE_SIZE)
}
