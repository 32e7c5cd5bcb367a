//! In-process implementation of the collaborator traits.
//!
//! Plays the role the managed backend plays in production: the demo binary
//! seeds one with a handful of vendors, and integration tests use it as a
//! deterministic stand-in that never fails.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::directory::{DirectoryError, OrderStore, VendorDirectory};
use crate::model::{DeliveryProfile, Vendor, VendorId};

/// An infallible, in-memory vendor directory and order store.
///
/// Built once at startup with the builder-style `with_*` methods and then
/// shared behind an `Arc`; all trait methods read immutable state.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    vendors: Vec<Vendor>,
    profiles: HashMap<VendorId, DeliveryProfile>,
    pending: HashMap<VendorId, u32>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an active vendor.
    pub fn with_vendor(mut self, vendor: Vendor) -> Self {
        self.vendors.push(vendor);
        self
    }

    /// Attaches a delivery profile to a vendor. Vendors without one fall
    /// back to [`DeliveryProfile::default`] in the orchestrator.
    pub fn with_profile(mut self, vendor_id: impl Into<VendorId>, profile: DeliveryProfile) -> Self {
        self.profiles.insert(vendor_id.into(), profile);
        self
    }

    /// Sets a vendor's pending-order backlog. Unset vendors count as 0.
    pub fn with_pending_orders(mut self, vendor_id: impl Into<VendorId>, count: u32) -> Self {
        self.pending.insert(vendor_id.into(), count);
        self
    }
}

#[async_trait]
impl VendorDirectory for InMemoryDirectory {
    async fn list_active_vendors(&self) -> Result<Vec<Vendor>, DirectoryError> {
        Ok(self.vendors.clone())
    }

    async fn get_delivery_profile(
        &self,
        vendor_id: &VendorId,
    ) -> Result<Option<DeliveryProfile>, DirectoryError> {
        Ok(self.profiles.get(vendor_id).cloned())
    }
}

#[async_trait]
impl OrderStore for InMemoryDirectory {
    async fn count_pending_orders(&self, vendor_id: &VendorId) -> Result<u32, DirectoryError> {
        Ok(self.pending.get(vendor_id).copied().unwrap_or(0))
    }
}
