//! Version history and diff engine configuration.

use serde::{Deserialize, Serialize};

/// Limits and tunables for the version history engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of lines (per side) for a full diff. Inputs beyond
    /// this are answered with a coarse changed/unchanged result.
    #[serde(default = "default_max_diff_lines")]
    pub max_diff_lines: usize,
    /// Maximum content size in bytes (per side) for a full diff.
    #[serde(default = "default_max_diff_bytes")]
    pub max_diff_bytes: usize,
    /// Maximum size in bytes accepted for a single version's content.
    #[serde(default = "default_max_content_bytes")]
    pub max_content_bytes: usize,
    /// Maximum length of a version message.
    #[serde(default = "default_max_message_length")]
    pub max_message_length: usize,
    /// Maximum page size for history listings.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
    /// Number of attempts for a rollback that hits a write conflict.
    #[serde(default = "default_rollback_retries")]
    pub rollback_retry_attempts: u32,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_diff_lines: default_max_diff_lines(),
            max_diff_bytes: default_max_diff_bytes(),
            max_content_bytes: default_max_content_bytes(),
            max_message_length: default_max_message_length(),
            max_page_size: default_max_page_size(),
            rollback_retry_attempts: default_rollback_retries(),
        }
    }
}

fn default_max_diff_lines() -> usize {
    20_000
}

fn default_max_diff_bytes() -> usize {
    4 * 1024 * 1024
}

fn default_max_content_bytes() -> usize {
    16 * 1024 * 1024
}

fn default_max_message_length() -> usize {
    1024
}

fn default_max_page_size() -> usize {
    100
}

fn default_rollback_retries() -> u32 {
    3
}
