//! # drafthub-core
//!
//! Core crate for DraftHub. Contains configuration schemas, typed
//! identifiers, domain events, cursor pagination types, the change
//! notification trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other DraftHub crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
