//! Shared value types: identifiers and cursor pagination.

pub mod id;
pub mod pagination;

pub use id::{DocumentId, VersionId};
pub use pagination::{CursorPage, CursorRequest};
