//! # drafthub-entity
//!
//! Domain entity models for DraftHub. Every struct in this crate
//! represents a stored record or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod document;

pub use document::FileVersion;
