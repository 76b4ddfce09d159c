//! Traits implemented by infrastructure crates.

pub mod notifier;

pub use notifier::ChangeNotifier;
