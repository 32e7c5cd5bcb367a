//! Pure data structures shared across the distance engine, the ETA
//! estimator, and the orchestrator.

pub mod coordinate;
pub mod profile;
pub mod vendor;

pub use coordinate::*;
pub use profile::*;
pub use vendor::*;
