//! Integration tests: the orchestrator against the in-memory directory.
//!
//! The unit tests in `src/nearby` cover the failure policy against scripted
//! mocks; these tests run the whole pipeline (directory listing, distance
//! filter, concurrent lookups, estimation) through the public API.

use std::sync::Arc;

use chrono::{FixedOffset, TimeZone, Utc};

use nearby_eta::directory::memory::InMemoryDirectory;
use nearby_eta::model::{Coordinate, DeliveryProfile, Vendor};
use nearby_eta::nearby::NearbyService;

fn coord(lat: f64, lng: f64) -> Coordinate {
    Coordinate::new(lat, lng).unwrap()
}

/// Vendors spread along the equator so distances are easy to reason about:
/// 0.01 degrees of longitude is ~1.11 km.
fn seeded_directory() -> InMemoryDirectory {
    InMemoryDirectory::new()
        .with_vendor(Vendor::new("a", "Alpha Mart", Some(coord(0.0, 0.005))))
        .with_vendor(Vendor::new("b", "Beta Mart", Some(coord(0.0, 0.015))))
        .with_vendor(Vendor::new("c", "Gamma Mart", Some(coord(0.0, 0.08))))
        .with_vendor(Vendor::new("d", "No-Coords Mart", None))
        .with_profile(
            "b",
            DeliveryProfile {
                base_prep_minutes: 10.0,
                max_parallel_orders: 2,
                buffer_minutes: 5.0,
                avg_rider_speed_kmph: 20.0,
            },
        )
        .with_pending_orders("a", 2)
        .with_pending_orders("b", 4)
}

fn service_at_hour(directory: Arc<InMemoryDirectory>, utc_hour: u32) -> NearbyService {
    NearbyService::new(
        directory.clone(),
        directory,
        FixedOffset::east_opt(0).unwrap(),
    )
    .with_clock(move || Utc.with_ymd_and_hms(2026, 3, 2, utc_hour, 0, 0).unwrap())
}

#[tokio::test]
async fn full_pipeline_orders_and_annotates() {
    let directory = Arc::new(seeded_directory());
    let service = service_at_hour(directory, 13); // off-peak

    let result = service.nearby_vendors(coord(0.0, 0.0), 3.0).await.unwrap();

    // "c" is ~8.9 km out, "d" has no coordinates; both excluded.
    let ids: Vec<&str> = result.vendors.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
    assert!(!result.peak_hour);

    // a (~0.56 km): default profile, 2 pending <= capacity 3.
    // prep 5 + travel 1.67 + buffer 5 = 11.67 -> band [7, 17].
    assert_eq!(result.vendors[0].eta.min_eta, 7);
    assert_eq!(result.vendors[0].eta.max_eta, 17);
    assert_eq!(result.vendors[0].distance_km, 0.56);

    // b (~1.67 km): custom profile, 4 pending vs capacity 2 -> 2 excess.
    // prep 10 + 4 + travel 5.0 + buffer 5 = 24.0 -> band [19, 29].
    assert_eq!(result.vendors[1].eta.min_eta, 19);
    assert_eq!(result.vendors[1].eta.max_eta, 29);
}

#[tokio::test]
async fn widening_the_radius_only_adds_vendors() {
    let directory = Arc::new(seeded_directory());
    let service = service_at_hour(directory, 13);
    let origin = coord(0.0, 0.0);

    let narrow = service.nearby_vendors(origin, 1.0).await.unwrap();
    let wide = service.nearby_vendors(origin, 10.0).await.unwrap();

    assert!(narrow.vendors.len() <= wide.vendors.len());
    for v in &narrow.vendors {
        assert!(wide.vendors.iter().any(|w| w.id == v.id));
    }
    // The wide result picks up the distant vendor as well.
    assert!(wide.vendors.iter().any(|v| v.id == "c"));
}

#[tokio::test]
async fn peak_hour_slows_every_moving_estimate() {
    let directory = Arc::new(seeded_directory());
    let off_peak = service_at_hour(directory.clone(), 13);
    let peak = service_at_hour(directory, 19);

    let origin = coord(0.0, 0.0);
    let calm = off_peak.nearby_vendors(origin, 3.0).await.unwrap();
    let rush = peak.nearby_vendors(origin, 3.0).await.unwrap();

    assert!(!calm.peak_hour);
    assert!(rush.peak_hour);
    assert_eq!(calm.vendors.len(), rush.vendors.len());
    for (c, r) in calm.vendors.iter().zip(&rush.vendors) {
        assert_eq!(c.id, r.id, "annotation must not re-sort");
        assert!(r.eta.max_eta >= c.eta.max_eta);
    }
}
