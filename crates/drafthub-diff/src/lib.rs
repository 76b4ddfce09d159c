//! # drafthub-diff
//!
//! Pure, stateless line diffing for DraftHub:
//!
//! - `entry`: the tagged [`DiffEntry`] variant type
//! - `myers`: Myers O(N·D) shortest-edit-script alignment over lines
//! - `report`: change counts and side-by-side rendering rows
//!
//! Inputs arrive pre-split into lines; line-ending normalization happens
//! before this boundary. Nothing in this crate performs I/O or holds
//! state, so every function is safe to call concurrently.

pub mod entry;
pub mod myers;
pub mod report;

pub use entry::DiffEntry;
pub use myers::diff;
pub use report::{CompareOutcome, ComparisonReport, SideBySideRow, SideCell};
