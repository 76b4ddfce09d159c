//! Application state shared across all handlers.

use std::sync::Arc;

use drafthub_core::config::AppConfig;
use drafthub_core::traits::notifier::BroadcastNotifier;
use drafthub_service::{HistoryService, RollbackService};
use drafthub_store::MemoryVersionStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Version history service (create, list, get, compare).
    pub history_service: Arc<HistoryService>,
    /// Rollback service.
    pub rollback_service: Arc<RollbackService>,
    /// Change notification fan-out.
    pub notifier: Arc<BroadcastNotifier>,
}

impl AppState {
    /// Build the full state graph from configuration with the in-memory
    /// store backend.
    pub fn new(config: AppConfig) -> Self {
        let notifier = Arc::new(BroadcastNotifier::default());
        let store = Arc::new(MemoryVersionStore::new(&config.history));
        let history_service = Arc::new(HistoryService::new(
            store,
            notifier.clone(),
            config.history.clone(),
        ));
        let rollback_service = Arc::new(RollbackService::new((*history_service).clone()));

        Self {
            config: Arc::new(config),
            history_service,
            rollback_service,
            notifier,
        }
    }
}
