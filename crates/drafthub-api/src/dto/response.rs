//! Response DTOs.

use serde::{Deserialize, Serialize};

use drafthub_diff::{CompareOutcome, SideBySideRow};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Comparison response: the outcome plus an aligned rendering when a
/// full diff was computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    /// Counts and edit script, or the coarse changed flag.
    pub result: CompareOutcome,
    /// Side-by-side rows; absent for coarse results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side_by_side: Option<Vec<SideBySideRow>>,
}

impl CompareResponse {
    /// Build the response, rendering side-by-side rows for full results.
    pub fn from_outcome(result: CompareOutcome) -> Self {
        let side_by_side = match &result {
            CompareOutcome::Full(report) => Some(report.side_by_side()),
            CompareOutcome::Coarse { .. } => None,
        };
        Self {
            result,
            side_by_side,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use drafthub_diff::{diff, ComparisonReport};

    #[test]
    fn test_coarse_response_has_no_rows() {
        let response = CompareResponse::from_outcome(CompareOutcome::Coarse { changed: true });
        assert!(response.side_by_side.is_none());
        let json = serde_json::to_value(&response).expect("serialize");
        assert!(json.get("side_by_side").is_none());
    }

    #[test]
    fn test_full_response_renders_rows() {
        let old = vec!["A".to_string(), "B".to_string()];
        let new = vec!["A".to_string(), "X".to_string()];
        let report = ComparisonReport::from_entries(diff(&old, &new));
        let response = CompareResponse::from_outcome(CompareOutcome::Full(report));
        let rows = response.side_by_side.expect("rows present");
        assert_eq!(rows.len(), 2);
    }
}
