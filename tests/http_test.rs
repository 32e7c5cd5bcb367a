//! Router-level tests for the HTTP surface: status codes, the response
//! envelope, and the error mapping.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{FixedOffset, TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;

use nearby_eta::directory::memory::InMemoryDirectory;
use nearby_eta::directory::mock::{MockDirectory, MockOrderStore};
use nearby_eta::http::create_router;
use nearby_eta::model::{Coordinate, Vendor};
use nearby_eta::nearby::NearbyService;

fn coord(lat: f64, lng: f64) -> Coordinate {
    Coordinate::new(lat, lng).unwrap()
}

/// Router over a two-vendor in-memory directory, pinned to an off-peak hour.
fn test_router() -> axum::Router {
    let directory = Arc::new(
        InMemoryDirectory::new()
            .with_vendor(Vendor::new("near", "Near Mart", Some(coord(0.0, 0.01))))
            .with_vendor(Vendor::new("far", "Far Mart", Some(coord(0.0, 0.05))))
            .with_pending_orders("near", 1),
    );
    let service = NearbyService::new(
        directory.clone(),
        directory,
        FixedOffset::east_opt(0).unwrap(),
    )
    .with_clock(|| Utc.with_ymd_and_hms(2026, 3, 2, 13, 0, 0).unwrap());
    create_router(Arc::new(service))
}

async fn get(router: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, body)
}

#[tokio::test]
async fn health_endpoint_responds() {
    let (status, body) = get(test_router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".into()));
}

#[tokio::test]
async fn nearby_returns_envelope_with_default_radius() {
    let (status, body) = get(test_router(), "/vendors/nearby?lat=0&lng=0").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["radiusKm"], 2.0);
    assert_eq!(body["peakHour"], false);
    assert_eq!(body["userLocation"]["lat"], 0.0);
    assert_eq!(body["count"], 1);

    // Only "near" (~1.11 km) fits the 2 km default; "far" is ~5.6 km out.
    let vendors = body["vendors"].as_array().unwrap();
    assert_eq!(vendors.len(), 1);
    assert_eq!(vendors[0]["id"], "near");
    assert_eq!(vendors[0]["distanceKm"], 1.11);
    // Default profile, 1 pending order: raw ~13.34 -> band [8, 18].
    assert_eq!(vendors[0]["eta"]["minEta"], 8);
    assert_eq!(vendors[0]["eta"]["maxEta"], 18);
}

#[tokio::test]
async fn explicit_radius_widens_the_search() {
    let (status, body) = get(test_router(), "/vendors/nearby?lat=0&lng=0&radiusKm=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["radiusKm"], 10.0);
}

#[tokio::test]
async fn missing_or_malformed_location_is_rejected() {
    let (status, _) = get(test_router(), "/vendors/nearby?lng=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(test_router(), "/vendors/nearby?lat=abc&lng=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn out_of_range_coordinates_are_rejected() {
    let (status, body) = get(test_router(), "/vendors/nearby?lat=123&lng=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("latitude"));
}

#[tokio::test]
async fn non_positive_radius_is_rejected() {
    let (status, body) = get(test_router(), "/vendors/nearby?lat=0&lng=0&radiusKm=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("radius"));

    let (status, _) = get(test_router(), "/vendors/nearby?lat=0&lng=0&radiusKm=-3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn directory_outage_maps_to_bad_gateway() {
    let service = NearbyService::new(
        Arc::new(MockDirectory::new().listing_fails()),
        Arc::new(MockOrderStore::new()),
        FixedOffset::east_opt(0).unwrap(),
    );
    let router = create_router(Arc::new(service));

    let (status, body) = get(router, "/vendors/nearby?lat=0&lng=0").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("unavailable"));
}
