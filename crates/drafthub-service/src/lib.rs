//! # drafthub-service
//!
//! Business logic for the DraftHub history engine: version creation with
//! input validation, history queries, two-sided comparison with a coarse
//! fallback for oversized inputs, and rollback-by-append.

pub mod history;

pub use history::compare::CompareSide;
pub use history::rollback::RollbackService;
pub use history::service::HistoryService;
