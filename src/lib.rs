//! # nearby-eta
//!
//! > **Geo-proximity vendor matching and delivery ETA estimation for a
//! > hyperlocal quick-commerce marketplace.**
//!
//! Given a customer coordinate and a search radius, this service answers a
//! single read-only question: *which shops are nearby, and when would each
//! one deliver?*
//!
//! ## 🗺️ Module Tour
//!
//! The codebase is organized in layers. Here is your map:
//!
//! ### 1. The Engines ([`geo`], [`eta`])
//! Pure functions with no I/O and no shared state.
//! - **[`geo`]**: Haversine great-circle distance and radius filtering of
//!   vendor candidates.
//! - **[`eta`]**: the queueing-delay-aware estimate: prep time, linear
//!   backpressure beyond the vendor's parallel capacity, peak-hour travel
//!   penalty, and a ±5 minute confidence band floored at 5 minutes.
//!
//! ### 2. The Collaborator Seam ([`directory`])
//! The vendor directory and the order store are external, read-only
//! collaborators behind async traits. [`directory::memory`] is the
//! in-process stand-in used by the demo binary; [`directory::mock`] scripts
//! failures for tests.
//!
//! ### 3. The Orchestrator ([`nearby`])
//! [`NearbyService`](nearby::NearbyService) composes the engines over the
//! collaborators: list, filter, concurrent per-vendor fan-out, estimate.
//! Per-vendor lookup failures degrade to defaults instead of failing the
//! request, so one flaky vendor never poisons the results for all others.
//!
//! ### 4. The Surface ([`http`], [`lifecycle`])
//! An `axum` router exposing `GET /vendors/nearby`, plus tracing setup and
//! environment configuration.
//!
//! ## 🚀 Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! curl 'localhost:3000/vendors/nearby?lat=28.6139&lng=77.2090&radiusKm=3'
//! ```

pub mod directory;
pub mod eta;
pub mod geo;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod nearby;
