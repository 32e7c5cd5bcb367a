//! Geographic coordinate value type.
//!
//! A [`Coordinate`] is a validated latitude/longitude pair. The fallible
//! constructor is the only way to build one, so every `Coordinate` in the
//! system is guaranteed to be in range, so the distance engine never has to
//! re-check its inputs.

use serde::Serialize;
use thiserror::Error;

/// Errors raised when constructing a [`Coordinate`] from raw floats.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CoordinateError {
    /// Latitude outside `[-90, 90]` or not a finite number.
    #[error("latitude {0} out of range (expected -90 to 90)")]
    LatitudeOutOfRange(f64),

    /// Longitude outside `[-180, 180]` or not a finite number.
    #[error("longitude {0} out of range (expected -180 to 180)")]
    LongitudeOutOfRange(f64),
}

/// A point on the globe in decimal degrees.
///
/// Immutable value type with no identity; `Copy` because it is just two
/// floats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Builds a coordinate, rejecting out-of-range or non-finite components.
    ///
    /// Validation happens here, once, at the boundary. Callers downstream
    /// (the distance engine in particular) rely on this and do not validate
    /// again.
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange(lat));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(CoordinateError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }
}
