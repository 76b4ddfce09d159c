//! # drafthub-store
//!
//! Append-only, per-document version storage. The [`VersionStore`] trait
//! is the seam between the history services and the backing store; the
//! in-memory [`MemoryVersionStore`] is the default provider. History is
//! write-once: versions are appended, never updated or deleted.

pub mod memory;
pub mod store;

pub use memory::MemoryVersionStore;
pub use store::VersionStore;
