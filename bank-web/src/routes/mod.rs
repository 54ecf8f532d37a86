//! HTTP route handlers.

pub mod accounts;
pub mod calculators;
pub mod frontend;
pub mod locations;
pub mod products;
pub mod transfers;
pub mod verify;

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::api::HealthResponse;
use crate::state::AppState;

/// Health check endpoint.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        accounts: state.dataset.accounts.len(),
    })
}
