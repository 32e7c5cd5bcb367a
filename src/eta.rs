//! # ETA Estimator
//!
//! Queueing-delay-aware delivery-time estimation.
//!
//! The model is deliberately simple: fixed prep time, linear queueing delay
//! for every pending order beyond the vendor's parallel capacity, straight
//! travel time at an assumed rider speed with a flat peak-hour penalty, and a
//! safety buffer. The result is a ±5 minute confidence band with a 5 minute
//! floor on the lower bound.
//!
//! Every function here is pure. The only clock access lives in
//! [`is_peak_now`], which callers use to snapshot the peak flag once per
//! request.

use chrono::{DateTime, FixedOffset, TimeZone, Timelike, Utc};
use serde::Serialize;

use crate::model::DeliveryProfile;

/// Queueing delay added per order beyond the vendor's parallel capacity.
pub const QUEUE_DELAY_PER_ORDER_MINUTES: f64 = 2.0;

/// Flat congestion multiplier applied to travel time during peak hours.
pub const PEAK_TRAVEL_MULTIPLIER: f64 = 1.25;

/// Half-width of the confidence band around the raw estimate.
const BAND_HALF_WIDTH_MINUTES: f64 = 5.0;

/// Lower bound never drops below this, however close the vendor is.
const MIN_ETA_FLOOR_MINUTES: f64 = 5.0;

/// Per-request input to the estimator.
///
/// `distance_km` must come from a real distance computation (never negative);
/// `peak_hour` is snapshotted once per request so every vendor in a result
/// set shares the same flag.
#[derive(Debug, Clone)]
pub struct EtaInput {
    pub profile: DeliveryProfile,
    pub distance_km: f64,
    pub pending_orders: u32,
    pub peak_hour: bool,
}

/// The user-facing delivery window, in whole minutes from order placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EtaBand {
    pub min_eta: u32,
    pub max_eta: u32,
}

/// Full estimator output: the raw (unrounded) estimate plus its band.
#[derive(Debug, Clone, PartialEq)]
pub struct EtaResult {
    pub raw_eta: f64,
    pub min_eta: u32,
    pub max_eta: u32,
}

impl EtaResult {
    pub fn band(&self) -> EtaBand {
        EtaBand {
            min_eta: self.min_eta,
            max_eta: self.max_eta,
        }
    }
}

/// Computes a bounded delivery estimate for one vendor.
///
/// Total over its valid domain: the orchestrator guarantees a usable profile
/// (`avg_rider_speed_kmph > 0`, see [`DeliveryProfile::is_valid`]) and a
/// non-negative distance, so there is nothing to fail here.
///
/// Rounding of the band edges is round-half-away-from-zero (`f64::round`),
/// pinned by the `.5`-boundary tests below.
pub fn estimate(input: &EtaInput) -> EtaResult {
    let excess_orders = input
        .pending_orders
        .saturating_sub(input.profile.max_parallel_orders) as f64;
    let prep_time = input.profile.base_prep_minutes + excess_orders * QUEUE_DELAY_PER_ORDER_MINUTES;

    let mut travel_time = input.distance_km / input.profile.avg_rider_speed_kmph * 60.0;
    if input.peak_hour {
        travel_time *= PEAK_TRAVEL_MULTIPLIER;
    }

    let raw_eta = prep_time + travel_time + input.profile.buffer_minutes;

    let min_eta = (raw_eta - BAND_HALF_WIDTH_MINUTES)
        .round()
        .max(MIN_ETA_FLOOR_MINUTES) as u32;
    let max_eta = (raw_eta + BAND_HALF_WIDTH_MINUTES).round() as u32;

    EtaResult {
        raw_eta,
        min_eta,
        max_eta,
    }
}

/// Whether `hour` (0-23) falls in a peak traffic band.
///
/// Peak bands are 07:00-10:59 and 18:00-22:59, inclusive of both named
/// hours on both ends.
pub fn is_peak_hour(hour: u32) -> bool {
    matches!(hour, 7..=10 | 18..=22)
}

/// Peak-hour check for an explicit instant, for testability.
pub fn is_peak_at<Tz: TimeZone>(at: &DateTime<Tz>) -> bool {
    is_peak_hour(at.hour())
}

/// Peak-hour check for "now", interpreted in the configured business
/// timezone rather than whatever the host happens to be set to.
pub fn is_peak_now(business_tz: FixedOffset) -> bool {
    is_peak_at(&Utc::now().with_timezone(&business_tz))
}
