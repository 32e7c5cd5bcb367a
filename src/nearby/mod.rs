//! # Nearby-Vendor Orchestrator
//!
//! Composes the distance engine and the ETA estimator over the external
//! collaborators: list active vendors, filter by distance, fan out the
//! per-vendor profile and backlog lookups concurrently, estimate, and return
//! the annotated list in ascending-distance order.
//!
//! ## Failure policy
//!
//! A failed vendor listing is fatal to the request. A failed per-vendor
//! lookup is not: the affected vendor falls back to the default profile or a
//! zero backlog, logged at `warn!` and invisible to the caller. One flaky
//! vendor must never poison the results for all others.

pub mod error;

pub use error::NearbyError;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::task::JoinSet;
use tracing::{debug, info, instrument, warn};

use crate::directory::{OrderStore, VendorDirectory};
use crate::eta::{self, EtaInput};
use crate::geo::{self, VendorAtDistance};
use crate::model::{Coordinate, DeliveryProfile, VendorId, VendorWithEta};

/// The per-request result: annotated vendors plus the peak-hour snapshot the
/// estimates were computed under.
#[derive(Debug, Clone)]
pub struct NearbyVendors {
    /// Ascending-distance order, as established by the distance engine.
    pub vendors: Vec<VendorWithEta>,
    /// Computed once per request so every vendor shares the same flag.
    pub peak_hour: bool,
}

/// Stateless query service answering "which vendors are near this customer,
/// and when would they deliver?".
///
/// Dependencies are injected at construction: the two collaborators, the
/// business timezone, and (for tests) the clock. Nothing here mutates
/// vendor or order state.
pub struct NearbyService {
    directory: Arc<dyn VendorDirectory>,
    orders: Arc<dyn OrderStore>,
    business_tz: chrono::FixedOffset,
    clock: Box<dyn Fn() -> DateTime<Utc> + Send + Sync>,
}

impl NearbyService {
    pub fn new(
        directory: Arc<dyn VendorDirectory>,
        orders: Arc<dyn OrderStore>,
        business_tz: chrono::FixedOffset,
    ) -> Self {
        Self {
            directory,
            orders,
            business_tz,
            clock: Box::new(Utc::now),
        }
    }

    /// Replaces the wall clock, pinning the peak-hour flag in tests.
    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Answers the nearby-vendor query.
    ///
    /// The origin is already validated by construction; the radius is
    /// validated here. Results keep the distance engine's ordering; ETA
    /// annotation never re-sorts.
    #[instrument(skip(self))]
    pub async fn nearby_vendors(
        &self,
        origin: Coordinate,
        radius_km: f64,
    ) -> Result<NearbyVendors, NearbyError> {
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(NearbyError::InvalidRadius(radius_km));
        }

        let all_vendors = self.directory.list_active_vendors().await?;
        let candidates = geo::find_nearby_vendors(&all_vendors, origin, radius_km);
        debug!(
            total = all_vendors.len(),
            candidates = candidates.len(),
            "Filtered vendors by distance"
        );

        // One snapshot per request, not per vendor.
        let now = (self.clock)().with_timezone(&self.business_tz);
        let peak_hour = eta::is_peak_at(&now);

        let vendors = self.annotate(candidates, peak_hour).await;
        info!(count = vendors.len(), peak_hour, "Nearby vendors resolved");

        Ok(NearbyVendors { vendors, peak_hour })
    }

    /// Fans out the per-vendor lookups and attaches an ETA to each candidate.
    ///
    /// The lookups are independent of each other, so they run as concurrent
    /// tasks; results are written back by index, which preserves the
    /// candidates' ascending-distance order regardless of completion order.
    async fn annotate(&self, candidates: Vec<VendorAtDistance>, peak_hour: bool) -> Vec<VendorWithEta> {
        let mut lookups: Vec<Option<(DeliveryProfile, u32)>> = vec![None; candidates.len()];

        let mut tasks = JoinSet::new();
        for (index, candidate) in candidates.iter().enumerate() {
            let directory = Arc::clone(&self.directory);
            let orders = Arc::clone(&self.orders);
            let vendor_id = candidate.vendor.id.clone();
            tasks.spawn(async move {
                let profile = resolve_profile(directory.as_ref(), &vendor_id).await;
                let pending = resolve_pending_orders(orders.as_ref(), &vendor_id).await;
                (index, profile, pending)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, profile, pending)) => lookups[index] = Some((profile, pending)),
                // A panicked lookup task degrades like a failed lookup.
                Err(e) => warn!(error = %e, "Vendor lookup task failed"),
            }
        }

        candidates
            .into_iter()
            .zip(lookups)
            .map(|(candidate, lookup)| {
                let (profile, pending_orders) = lookup.unwrap_or_default();
                let result = eta::estimate(&EtaInput {
                    profile,
                    distance_km: candidate.distance_km,
                    pending_orders,
                    peak_hour,
                });
                VendorWithEta::new(candidate.vendor, candidate.distance_km, result.band())
            })
            .collect()
    }
}

/// Resolves a vendor's delivery profile, degrading to the default on an
/// absent record, a failed lookup, or an unusable (zero-speed) profile.
async fn resolve_profile(directory: &dyn VendorDirectory, vendor_id: &VendorId) -> DeliveryProfile {
    match directory.get_delivery_profile(vendor_id).await {
        Ok(Some(profile)) if profile.is_valid() => profile,
        Ok(Some(profile)) => {
            warn!(%vendor_id, ?profile, "Unusable delivery profile, using default");
            DeliveryProfile::default()
        }
        Ok(None) => DeliveryProfile::default(),
        Err(e) => {
            warn!(%vendor_id, error = %e, "Profile lookup failed, using default");
            DeliveryProfile::default()
        }
    }
}

/// Resolves a vendor's pending-order backlog, degrading to 0 on failure.
async fn resolve_pending_orders(orders: &dyn OrderStore, vendor_id: &VendorId) -> u32 {
    match orders.count_pending_orders(vendor_id).await {
        Ok(count) => count,
        Err(e) => {
            warn!(%vendor_id, error = %e, "Pending-order lookup failed, assuming none");
            0
        }
    }
}
