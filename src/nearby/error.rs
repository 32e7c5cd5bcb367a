//! Error taxonomy for nearby-vendor requests.

use thiserror::Error;

use crate::directory::DirectoryError;
use crate::model::CoordinateError;

/// Errors a nearby-vendor request can surface to the caller.
///
/// Only two things can fail a request: bad input and an unreachable vendor
/// directory. Per-vendor lookup failures are deliberately absent; they
/// degrade to defaults inside the orchestrator and are never propagated.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NearbyError {
    /// The customer location failed validation.
    #[error("invalid location: {0}")]
    InvalidCoordinate(#[from] CoordinateError),

    /// The search radius was zero, negative, or not a finite number.
    #[error("invalid radius {0}: expected a positive number of kilometres")]
    InvalidRadius(f64),

    /// The vendor directory could not be listed; nothing useful can be
    /// returned without it.
    #[error("vendor directory unavailable: {0}")]
    Directory(#[from] DirectoryError),
}
