//! Location route handlers: directory lookup and proximity search.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use bank_core::locations::LocationKind;
use serde::Deserialize;

use crate::api::{ApiLocation, LocationsResponse};
use crate::error::AppError;
use crate::state::AppState;

fn default_radius() -> f64 {
    25.0
}

/// Query parameters for proximity search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Caller latitude, decimal degrees.
    pub lat: Option<f64>,
    /// Caller longitude, decimal degrees.
    pub lng: Option<f64>,
    /// Search radius in miles.
    #[serde(default = "default_radius")]
    pub radius: f64,
    /// Filter by location kind (atm or branch).
    pub kind: Option<String>,
}

/// Find ATMs and branches near a coordinate.
pub async fn search_locations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<LocationsResponse>, AppError> {
    // Zero doubles as missing: the upstream geolocation feed sends
    // (0, 0) when it has no fix.
    let (lat, lng) = match (params.lat, params.lng) {
        (Some(lat), Some(lng))
            if lat != 0.0 && lng != 0.0 && lat.is_finite() && lng.is_finite() =>
        {
            (lat, lng)
        }
        _ => {
            return Err(AppError::BadRequest(
                "lat and lng are required".to_string(),
            ))
        }
    };

    if !params.radius.is_finite() || params.radius <= 0.0 {
        return Err(AppError::BadRequest(
            "radius must be a positive number".to_string(),
        ));
    }

    let kind = match &params.kind {
        Some(s) => Some(
            LocationKind::parse(s)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown location kind: {}", s)))?,
        ),
        None => None,
    };

    let locations: Vec<ApiLocation> = state
        .catalog
        .search_nearby(lat, lng, params.radius, kind)
        .iter()
        .map(ApiLocation::from)
        .collect();

    Ok(Json(LocationsResponse { locations }))
}

/// Get a single location by ID.
pub async fn get_location(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiLocation>, AppError> {
    let location = state
        .catalog
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Location {} not found", id)))?;

    Ok(Json(ApiLocation::from(location)))
}
