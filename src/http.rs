//! HTTP query surface.
//!
//! One read-only endpoint, `GET /vendors/nearby`, plus a health probe. The
//! handler is a thin adapter: parse and validate the query, call
//! [`NearbyService`], wrap the result in the response envelope. All the
//! interesting behaviour lives in the orchestrator.
//!
//! Missing or non-numeric `lat`/`lng` are rejected by the `Query` extractor
//! before the handler runs; out-of-range coordinates and non-positive radii
//! are rejected by the domain and mapped to 400 here. A directory outage
//! maps to 502; the caller may retry the whole request.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::model::{Coordinate, VendorWithEta};
use crate::nearby::{NearbyError, NearbyService};

/// Search radius applied when the caller does not pass `radiusKm`.
pub const DEFAULT_RADIUS_KM: f64 = 2.0;

#[derive(Clone)]
pub struct AppState {
    service: Arc<NearbyService>,
}

/// Builds the service router.
pub fn create_router(service: Arc<NearbyService>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/vendors/nearby", get(nearby_vendors))
        .with_state(AppState { service })
}

async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NearbyQuery {
    lat: f64,
    lng: f64,
    #[serde(default = "default_radius")]
    radius_km: f64,
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS_KM
}

/// Response envelope for `GET /vendors/nearby`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NearbyResponse {
    vendors: Vec<VendorWithEta>,
    count: usize,
    user_location: Coordinate,
    radius_km: f64,
    peak_hour: bool,
}

async fn nearby_vendors(
    State(state): State<AppState>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<NearbyResponse>, NearbyError> {
    let origin = Coordinate::new(query.lat, query.lng)?;
    let result = state.service.nearby_vendors(origin, query.radius_km).await?;

    Ok(Json(NearbyResponse {
        count: result.vendors.len(),
        vendors: result.vendors,
        user_location: origin,
        radius_km: query.radius_km,
        peak_hour: result.peak_hour,
    }))
}

impl IntoResponse for NearbyError {
    fn into_response(self) -> Response {
        let status = match &self {
            NearbyError::InvalidCoordinate(_) | NearbyError::InvalidRadius(_) => {
                StatusCode::BAD_REQUEST
            }
            NearbyError::Directory(_) => StatusCode::BAD_GATEWAY,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
