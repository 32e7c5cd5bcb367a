//! External collaborator contracts.
//!
//! The vendor directory and the order store live outside this service; we
//! only ever read from them. Both are modelled as async traits so the
//! orchestrator can be wired to the real backend in production and to
//! scripted implementations in tests, the same seam the rest of the crate
//! uses everywhere dependencies cross a boundary.
//!
//! # Testing
//!
//! See [`mock`] for scripted implementations and [`memory`] for the
//! in-process directory used by the demo binary and integration tests.

pub mod memory;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{DeliveryProfile, Vendor, VendorId};

/// Errors surfaced by collaborator lookups.
///
/// The orchestrator decides severity, not the collaborator: a failed vendor
/// listing is fatal to the request, a failed per-vendor lookup degrades to
/// defaults.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DirectoryError {
    /// The backing service could not be reached or answered with an error.
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
}

/// Read-only access to the external vendor directory.
#[async_trait]
pub trait VendorDirectory: Send + Sync {
    /// All currently active vendors. Records may lack coordinates; the
    /// distance engine excludes those.
    async fn list_active_vendors(&self) -> Result<Vec<Vendor>, DirectoryError>;

    /// The vendor's delivery profile, or `None` when the vendor has none on
    /// file.
    async fn get_delivery_profile(
        &self,
        vendor_id: &VendorId,
    ) -> Result<Option<DeliveryProfile>, DirectoryError>;
}

/// Read-only access to the external order store.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Orders accepted but not yet delivered for this vendor, the backlog
    /// proxy fed to the ETA estimator.
    async fn count_pending_orders(&self, vendor_id: &VendorId) -> Result<u32, DirectoryError>;
}
