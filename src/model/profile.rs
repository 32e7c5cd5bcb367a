//! Vendor fulfillment characteristics used by the ETA estimator.

use serde::{Deserialize, Serialize};

/// Describes how a vendor fulfils orders.
///
/// Supplied per-vendor by the external directory, or [`Default`] when the
/// vendor has none on file. Immutable for the duration of one ETA
/// computation; persistence belongs to the directory, not to this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryProfile {
    /// Fixed picking/packing time in minutes.
    pub base_prep_minutes: f64,
    /// Orders the vendor can work in parallel before queueing delay begins.
    pub max_parallel_orders: u32,
    /// Safety margin added to every estimate, in minutes.
    pub buffer_minutes: f64,
    /// Assumed rider travel speed in km/h. Must be positive.
    pub avg_rider_speed_kmph: f64,
}

impl Default for DeliveryProfile {
    /// Process-wide fallback profile: 5 min prep, 3 parallel orders,
    /// 5 min buffer, 20 km/h rider speed.
    fn default() -> Self {
        Self {
            base_prep_minutes: 5.0,
            max_parallel_orders: 3,
            buffer_minutes: 5.0,
            avg_rider_speed_kmph: 20.0,
        }
    }
}

impl DeliveryProfile {
    /// Whether the profile can safely be fed to the estimator.
    ///
    /// A zero or non-finite rider speed would make the travel-time division
    /// meaningless. The orchestrator treats an invalid profile like a failed
    /// lookup and substitutes the default instead of estimating with it.
    pub fn is_valid(&self) -> bool {
        self.avg_rider_speed_kmph.is_finite()
            && self.avg_rider_speed_kmph > 0.0
            && self.base_prep_minutes >= 0.0
            && self.buffer_minutes >= 0.0
            && self.max_parallel_orders >= 1
    }
}
