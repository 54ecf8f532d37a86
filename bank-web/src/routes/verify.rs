//! Account verification route handler.

use axum::Json;
use bank_core::verify::{verify_account, BankChecks};

use crate::api::{ApiVerification, VerifyRequest};

/// Verify an account/routing number pair.
///
/// Rejections come back as `200` with `valid: false`: a failed check
/// is a verdict about the caller's input, not a transport error. This
/// endpoint applies the strict bank profile (8-12 digit accounts).
pub async fn verify(Json(request): Json<VerifyRequest>) -> Json<ApiVerification> {
    let verdict = verify_account(
        &request.account_number,
        &request.routing_number,
        &BankChecks::strict(),
    );

    Json(ApiVerification::from(&verdict))
}
