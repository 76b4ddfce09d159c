//! Domain events emitted by DraftHub operations.
//!
//! Events are published through the [`ChangeNotifier`] so that external
//! collaborators (live document views, audit logging) can react to
//! history changes without the engine knowing about them.
//!
//! [`ChangeNotifier`]: crate::traits::notifier::ChangeNotifier

pub mod document;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use document::DocumentEvent;

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The author who caused the event (opaque identity reference).
    pub actor: Option<String>,
    /// The event payload.
    pub payload: DocumentEvent,
}

impl DomainEvent {
    /// Create a new domain event.
    pub fn new(actor: Option<String>, payload: DocumentEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            actor,
            payload,
        }
    }
}
