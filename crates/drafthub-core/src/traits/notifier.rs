//! Change notification sink.
//!
//! The engine owns version history only; anything that maintains a live
//! view of "current content" subscribes through an implementation of
//! [`ChangeNotifier`]. Notification failures are logged and swallowed so
//! that a missing subscriber can never fail a committed write.

use async_trait::async_trait;

use crate::events::DomainEvent;

/// Sink for history change notifications.
#[async_trait]
pub trait ChangeNotifier: Send + Sync + 'static {
    /// Publish an event. Called after the corresponding write committed.
    async fn notify(&self, event: DomainEvent);
}

/// Broadcast-backed notifier.
///
/// Fans events out to any number of subscribers via a
/// `tokio::sync::broadcast` channel. Subscribers that lag are allowed to
/// miss events; history itself is always re-readable from the store.
#[derive(Debug)]
pub struct BroadcastNotifier {
    sender: tokio::sync::broadcast::Sender<DomainEvent>,
}

impl BroadcastNotifier {
    /// Create a notifier with the given channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = tokio::sync::broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to the event stream.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new(256)
    }
}

#[async_trait]
impl ChangeNotifier for BroadcastNotifier {
    async fn notify(&self, event: DomainEvent) {
        // Send fails only when there are no subscribers, which is fine.
        if self.sender.send(event).is_err() {
            tracing::debug!("No subscribers for history change event");
        }
    }
}

/// No-op notifier for tests and embedded use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

#[async_trait]
impl ChangeNotifier for NullNotifier {
    async fn notify(&self, _event: DomainEvent) {}
}
