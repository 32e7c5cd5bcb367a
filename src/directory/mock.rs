//! # Mock collaborators
//!
//! Scripted implementations of [`VendorDirectory`] and [`OrderStore`] for
//! testing the orchestrator in isolation, in particular its degraded-mode
//! behaviour when individual lookups fail.
//!
//! # Example
//! ```ignore
//! let directory = MockDirectory::new()
//!     .vendors(vec![vendor_a, vendor_b])
//!     .profile_fails("vendor_a");
//! let orders = MockOrderStore::new().count_fails("vendor_b");
//! // vendor_a estimates with the default profile, vendor_b with 0 pending.
//! ```

use std::collections::HashMap;

use async_trait::async_trait;

use crate::directory::{DirectoryError, OrderStore, VendorDirectory};
use crate::model::{DeliveryProfile, Vendor, VendorId};

fn unavailable(what: &str) -> DirectoryError {
    DirectoryError::Unavailable(format!("{what} (mock)"))
}

/// A vendor directory with per-call scripted outcomes.
///
/// Defaults are permissive: the listing is empty-but-successful and every
/// profile lookup answers `Ok(None)`. Script failures explicitly with
/// [`listing_fails`](Self::listing_fails) and
/// [`profile_fails`](Self::profile_fails).
#[derive(Debug)]
pub struct MockDirectory {
    listing: Option<Vec<Vendor>>,
    profiles: HashMap<VendorId, Result<Option<DeliveryProfile>, DirectoryError>>,
}

impl MockDirectory {
    pub fn new() -> Self {
        Self {
            listing: Some(Vec::new()),
            profiles: HashMap::new(),
        }
    }

    /// Scripts the active-vendor listing.
    pub fn vendors(mut self, vendors: Vec<Vendor>) -> Self {
        self.listing = Some(vendors);
        self
    }

    /// Makes every `list_active_vendors` call fail.
    pub fn listing_fails(mut self) -> Self {
        self.listing = None;
        self
    }

    /// Scripts a successful profile lookup for one vendor.
    pub fn profile(mut self, vendor_id: impl Into<VendorId>, profile: DeliveryProfile) -> Self {
        self.profiles.insert(vendor_id.into(), Ok(Some(profile)));
        self
    }

    /// Makes the profile lookup for one vendor fail.
    pub fn profile_fails(mut self, vendor_id: impl Into<VendorId>) -> Self {
        self.profiles
            .insert(vendor_id.into(), Err(unavailable("profile lookup failed")));
        self
    }
}

#[async_trait]
impl VendorDirectory for MockDirectory {
    async fn list_active_vendors(&self) -> Result<Vec<Vendor>, DirectoryError> {
        self.listing
            .clone()
            .ok_or_else(|| unavailable("vendor listing failed"))
    }

    async fn get_delivery_profile(
        &self,
        vendor_id: &VendorId,
    ) -> Result<Option<DeliveryProfile>, DirectoryError> {
        self.profiles
            .get(vendor_id)
            .cloned()
            .unwrap_or(Ok(None))
    }
}

/// An order store with per-vendor scripted backlog counts and failures.
///
/// Unscripted vendors answer `Ok(0)`.
#[derive(Debug, Default)]
pub struct MockOrderStore {
    counts: HashMap<VendorId, Result<u32, DirectoryError>>,
}

impl MockOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a successful pending-order count for one vendor.
    pub fn count(mut self, vendor_id: impl Into<VendorId>, pending: u32) -> Self {
        self.counts.insert(vendor_id.into(), Ok(pending));
        self
    }

    /// Makes the pending-order lookup for one vendor fail.
    pub fn count_fails(mut self, vendor_id: impl Into<VendorId>) -> Self {
        self.counts
            .insert(vendor_id.into(), Err(unavailable("order count failed")));
        self
    }
}

#[async_trait]
impl OrderStore for MockOrderStore {
    async fn count_pending_orders(&self, vendor_id: &VendorId) -> Result<u32, DirectoryError> {
        self.counts.get(vendor_id).cloned().unwrap_or(Ok(0))
    }
}
