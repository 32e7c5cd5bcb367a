//! Process lifecycle: tracing setup and environment configuration.

pub mod config;
pub mod tracing;

pub use config::AppConfig;
pub use tracing::setup_tracing;
