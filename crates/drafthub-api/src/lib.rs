//! # drafthub-api
//!
//! HTTP API layer for DraftHub using Axum. Exposes the history engine's
//! operations (create, list, fetch, compare, rollback) under `/api`,
//! maps `AppError` to HTTP status codes, and validates request DTOs.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
