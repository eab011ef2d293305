//! podium-common — Shared errors, configuration, and cache primitives used
//! across all Podium crates.

pub mod cache;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{PodiumError, Result};
