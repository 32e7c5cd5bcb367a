//! Vendor records as seen from the external directory, and the annotated
//! per-request view returned to customers.

use serde::Serialize;

use crate::eta::EtaBand;
use crate::model::Coordinate;

/// Identifier assigned by the external vendor directory.
pub type VendorId = String;

/// A shop offering products for delivery.
///
/// This is a read-only snapshot of a directory record. The directory may hold
/// vendors without a resolvable coordinate; those are representable here and
/// silently excluded by the distance engine.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Coordinate>,
}

impl Vendor {
    pub fn new(
        id: impl Into<VendorId>,
        name: impl Into<String>,
        coordinate: Option<Coordinate>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinate,
        }
    }
}

/// A vendor annotated with its distance from the customer and a delivery-time
/// window. Produced fresh per request, never stored.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorWithEta {
    pub id: VendorId,
    pub name: String,
    /// Great-circle distance from the customer, rounded to 2 decimals.
    pub distance_km: f64,
    pub eta: EtaBand,
}

impl VendorWithEta {
    /// Annotates a vendor, rounding the raw distance for presentation.
    pub fn new(vendor: Vendor, distance_km: f64, eta: EtaBand) -> Self {
        Self {
            id: vendor.id,
            name: vendor.name,
            distance_km: (distance_km * 100.0).round() / 100.0,
            eta,
        }
    }
}
