//! Financial calculator route handler.

use axum::response::{IntoResponse, Response};
use axum::Json;
use bank_core::calc::{loan, mortgage, savings};

use crate::api::CalculatorRequest;
use crate::error::AppError;

/// Run a calculator, dispatched on the request's `type` field.
///
/// Auto and personal loans share the same formula; both carry terms in
/// months. Only mortgage terms are denominated in years.
pub async fn calculate(Json(request): Json<CalculatorRequest>) -> Result<Response, AppError> {
    let response = match request {
        CalculatorRequest::Mortgage(terms) => Json(mortgage::calculate(&terms)?).into_response(),
        CalculatorRequest::Auto(terms) | CalculatorRequest::Personal(terms) => {
            Json(loan::calculate(&terms)?).into_response()
        }
        CalculatorRequest::Savings(plan) => Json(savings::project(&plan)?).into_response(),
    };

    Ok(response)
}
