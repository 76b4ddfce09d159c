//! History services: queries, comparison, and rollback.

pub mod compare;
pub mod rollback;
pub mod service;
