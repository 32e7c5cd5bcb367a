//! Demo binary: wires an in-memory vendor directory to the HTTP surface.
//!
//! In a real deployment the [`VendorDirectory`](nearby_eta::directory::VendorDirectory)
//! and [`OrderStore`](nearby_eta::directory::OrderStore) implementations
//! would call the managed backend; the seeded directory below stands in so
//! the service is runnable out of the box.

use std::sync::Arc;

use tracing::info;

use nearby_eta::directory::memory::InMemoryDirectory;
use nearby_eta::http::create_router;
use nearby_eta::lifecycle::{setup_tracing, AppConfig};
use nearby_eta::model::{Coordinate, DeliveryProfile, Vendor};
use nearby_eta::nearby::NearbyService;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = AppConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting nearby-eta");

    let directory = Arc::new(demo_directory().map_err(|e| e.to_string())?);
    let service = Arc::new(NearbyService::new(
        directory.clone(),
        directory,
        config.business_tz,
    ));

    let app = create_router(service);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|e| e.to_string())?;
    info!(addr = %config.bind_addr, "Listening");

    axum::serve(listener, app).await.map_err(|e| e.to_string())
}

/// A handful of central-Delhi vendors for local development.
fn demo_directory() -> Result<InMemoryDirectory, nearby_eta::model::CoordinateError> {
    let quick_profile = DeliveryProfile {
        base_prep_minutes: 3.0,
        max_parallel_orders: 5,
        buffer_minutes: 4.0,
        avg_rider_speed_kmph: 22.0,
    };

    Ok(InMemoryDirectory::new()
        .with_vendor(Vendor::new(
            "cp-grocers",
            "CP Grocers",
            Some(Coordinate::new(28.6315, 77.2167)?),
        ))
        .with_vendor(Vendor::new(
            "khan-market-dairy",
            "Khan Market Dairy",
            Some(Coordinate::new(28.6003, 77.2269)?),
        ))
        .with_vendor(Vendor::new(
            "karol-bagh-pharma",
            "Karol Bagh Pharma",
            Some(Coordinate::new(28.6519, 77.1907)?),
        ))
        .with_vendor(Vendor::new("popup-stall", "Pop-up Stall", None))
        .with_profile("cp-grocers", quick_profile)
        .with_pending_orders("cp-grocers", 6)
        .with_pending_orders("khan-market-dairy", 2))
}
