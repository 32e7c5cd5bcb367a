//! # Distance Engine
//!
//! Great-circle distance on a spherical Earth (Haversine) and radius-based
//! filtering of vendor candidates.
//!
//! Both functions are pure: no clocks, no I/O, no shared state. Coordinate
//! validation happens at construction ([`Coordinate::new`]), so everything
//! here assumes in-range inputs.

use crate::model::{Coordinate, Vendor};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, in kilometres.
///
/// Standard Haversine formula: symmetric, deterministic, and zero when both
/// points coincide.
pub fn haversine_distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// A directory vendor paired with its computed distance from the customer.
#[derive(Debug, Clone)]
pub struct VendorAtDistance {
    pub vendor: Vendor,
    pub distance_km: f64,
}

/// Filters `vendors` to those within `radius_km` of `origin`, sorted by
/// ascending distance.
///
/// Vendors without a resolvable coordinate are excluded, not errored: a
/// half-onboarded shop must never break the whole result. Ties keep the
/// directory's relative order (`sort_by` is stable).
pub fn find_nearby_vendors(
    vendors: &[Vendor],
    origin: Coordinate,
    radius_km: f64,
) -> Vec<VendorAtDistance> {
    let mut nearby: Vec<VendorAtDistance> = vendors
        .iter()
        .filter_map(|vendor| {
            let coordinate = vendor.coordinate?;
            let distance_km = haversine_distance_km(origin, coordinate);
            (distance_km <= radius_km).then(|| VendorAtDistance {
                vendor: vendor.clone(),
                distance_km,
            })
        })
        .collect();

    nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    nearby
}
