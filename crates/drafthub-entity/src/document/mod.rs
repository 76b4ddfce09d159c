//! Document domain entities.

pub mod version;

pub use version::FileVersion;
