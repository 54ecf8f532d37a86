//! Transfer route handlers.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::extract::{Path, Query, State};
use axum::Json;
use bank_core::TransferStatus;
use serde::Deserialize;

use crate::api::{dollars, ApiTransfer, TransferReceipt, TransferRequest, TransfersResponse};
use crate::error::AppError;
use crate::policy::Decision;
use crate::state::AppState;

fn default_limit() -> usize {
    100
}

/// Query parameters for listing transfers.
#[derive(Debug, Deserialize)]
pub struct ListTransfersParams {
    /// Maximum number of results.
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Return in reverse chronological order.
    #[serde(default)]
    pub reversed: bool,
}

/// List historical transfers.
pub async fn list_transfers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListTransfersParams>,
) -> Result<Json<TransfersResponse>, AppError> {
    let mut transfers: Vec<ApiTransfer> =
        state.dataset.transfers.iter().map(ApiTransfer::from).collect();
    if params.reversed {
        transfers.reverse();
    }
    transfers.truncate(params.limit);

    Ok(Json(TransfersResponse { transfers }))
}

/// Get a single transfer by ID.
pub async fn get_transfer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiTransfer>, AppError> {
    let transfer = state
        .dataset
        .transfer(&id)
        .ok_or_else(|| AppError::NotFound(format!("Transfer {} not found", id)))?;

    Ok(Json(ApiTransfer::from(transfer)))
}

/// Request a transfer between two demo accounts.
///
/// Validates the request, asks the approval policy, and returns a
/// receipt. The dataset itself is immutable; nothing is persisted.
pub async fn create_transfer(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TransferRequest>,
) -> Result<Json<TransferReceipt>, AppError> {
    if !request.amount.is_finite() || request.amount <= 0.0 {
        return Err(AppError::BadRequest(
            "amount must be a positive number".to_string(),
        ));
    }
    if request.from_account == request.to_account {
        return Err(AppError::BadRequest(
            "from_account and to_account must differ".to_string(),
        ));
    }

    let from = state.dataset.account(&request.from_account).ok_or_else(|| {
        AppError::BadRequest(format!("Unknown from_account: {}", request.from_account))
    })?;
    let to = state.dataset.account(&request.to_account).ok_or_else(|| {
        AppError::BadRequest(format!("Unknown to_account: {}", request.to_account))
    })?;

    let amount_cents = (request.amount * 100.0).round() as i64;

    let (status, reason) = match state.policy.decide(from, to, amount_cents) {
        Decision::Approved => (TransferStatus::Completed, None),
        Decision::Declined { reason } => (TransferStatus::Rejected, Some(reason)),
    };

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| AppError::Internal(format!("clock error: {}", e)))?
        .as_secs();

    Ok(Json(TransferReceipt {
        id: format!("tfr-{:032x}", bank_core::id()),
        from_account: from.id.clone(),
        to_account: to.id.clone(),
        amount: dollars(amount_cents),
        memo: request.memo,
        status,
        reason,
        timestamp,
    }))
}
