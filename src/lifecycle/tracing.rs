//! # Observability & Tracing
//!
//! Structured logging for the whole service via the `tracing` crate.
//!
//! Log levels are controlled with `RUST_LOG`:
//!
//! ```bash
//! # Request-level logs
//! RUST_LOG=info cargo run
//!
//! # Include per-vendor fallback decisions and filter counts
//! RUST_LOG=debug cargo run
//!
//! # Filter to the orchestrator only
//! RUST_LOG=nearby_eta::nearby=debug cargo run
//! ```
//!
//! Degraded-mode fallbacks (a vendor estimating off the default profile
//! because its lookup failed) are logged at `warn!`, so they are invisible to
//! the end user by design, so the logs are the only place they show up.

/// Initializes the global tracing subscriber. Call once at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
