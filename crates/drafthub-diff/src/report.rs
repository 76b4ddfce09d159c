//! Comparison reporting: change counts and side-by-side rendering.

use serde::{Deserialize, Serialize};

use crate::entry::DiffEntry;

/// Aggregated result of comparing two versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Count of `Add` entries.
    pub additions: usize,
    /// Count of `Delete` entries.
    pub deletions: usize,
    /// Count of `Modify` entries.
    pub modifications: usize,
    /// The full edit script, unchanged lines included.
    pub diff: Vec<DiffEntry>,
}

impl ComparisonReport {
    /// Aggregate a raw edit script into counts.
    ///
    /// `Unchanged` entries are excluded from every count but retained in
    /// `diff` so renderers can show context.
    pub fn from_entries(diff: Vec<DiffEntry>) -> Self {
        let mut additions = 0;
        let mut deletions = 0;
        let mut modifications = 0;
        for entry in &diff {
            match entry {
                DiffEntry::Add { .. } => additions += 1,
                DiffEntry::Delete { .. } => deletions += 1,
                DiffEntry::Modify { .. } => modifications += 1,
                DiffEntry::Unchanged { .. } => {}
            }
        }
        Self {
            additions,
            deletions,
            modifications,
            diff,
        }
    }

    /// Whether the two sides differ at all.
    pub fn has_changes(&self) -> bool {
        self.additions + self.deletions + self.modifications > 0
    }

    /// Render the diff as two vertically aligned line streams.
    ///
    /// Row `i` of the old and new streams line up: an `Add` occupies only
    /// the new cell (the old cell is `None`), a `Delete` only the old
    /// cell, `Modify` and `Unchanged` both.
    pub fn side_by_side(&self) -> Vec<SideBySideRow> {
        let mut rows = Vec::with_capacity(self.diff.len());
        let mut old_line = 0usize;
        let mut new_line = 0usize;

        for entry in &self.diff {
            let row = match entry {
                DiffEntry::Add { content, .. } => {
                    new_line += 1;
                    SideBySideRow {
                        old: None,
                        new: Some(SideCell::new(new_line, content)),
                    }
                }
                DiffEntry::Delete { content, .. } => {
                    old_line += 1;
                    SideBySideRow {
                        old: Some(SideCell::new(old_line, content)),
                        new: None,
                    }
                }
                DiffEntry::Modify {
                    old_content,
                    content,
                    ..
                } => {
                    old_line += 1;
                    new_line += 1;
                    SideBySideRow {
                        old: Some(SideCell::new(old_line, old_content)),
                        new: Some(SideCell::new(new_line, content)),
                    }
                }
                DiffEntry::Unchanged { content, .. } => {
                    old_line += 1;
                    new_line += 1;
                    SideBySideRow {
                        old: Some(SideCell::new(old_line, content)),
                        new: Some(SideCell::new(new_line, content)),
                    }
                }
            };
            rows.push(row);
        }
        rows
    }
}

/// One aligned row of the side-by-side rendering.
///
/// A `None` cell is the explicit blank placeholder that keeps the two
/// streams vertically aligned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideBySideRow {
    /// Old-side cell, absent for added lines.
    pub old: Option<SideCell>,
    /// New-side cell, absent for deleted lines.
    pub new: Option<SideCell>,
}

/// Content shown in one cell of the side-by-side rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideCell {
    /// 1-based line number on this side.
    pub line_number: usize,
    /// The line content.
    pub content: String,
}

impl SideCell {
    fn new(line_number: usize, content: &str) -> Self {
        Self {
            line_number,
            content: content.to_string(),
        }
    }
}

/// Outcome of a compare operation.
///
/// Oversized inputs are answered with the coarse variant instead of a
/// full alignment, so callers can still show "content differs" without
/// paying for the O(N·D) search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CompareOutcome {
    /// Full line-level comparison.
    Full(ComparisonReport),
    /// Degraded equality-only comparison.
    Coarse {
        /// Whether the two sides differ.
        changed: bool,
    },
}

impl CompareOutcome {
    /// Whether the two sides differ, in either mode.
    pub fn changed(&self) -> bool {
        match self {
            Self::Full(report) => report.has_changes(),
            Self::Coarse { changed } => *changed,
        }
    }
}
