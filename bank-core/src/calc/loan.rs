//! Auto and personal loan payment calculator.
//!
//! Both loan families share one amortizing-payment formula with no
//! escrow add-ons and no schedule. The term is a raw payment count in
//! months; callers working in years convert before calling.

use serde::{Deserialize, Serialize};

use super::{
    amortizing_payment, check_at_least_one, check_non_negative, check_positive, monthly_rate,
    round_cents,
};
use crate::error::CalcResult;

/// Inputs for a loan payment calculation.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LoanTerms {
    /// Amount financed.
    pub principal: f64,
    /// Annual percentage rate, as a percent.
    pub annual_rate_pct: f64,
    /// Number of monthly payments.
    pub term_months: u32,
}

/// Computed loan summary. All amounts rounded to cents.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LoanSummary {
    /// Fixed monthly payment.
    pub monthly_payment: f64,
    /// Paid over the full term.
    pub total_payment: f64,
    /// Interest paid over the full term.
    pub total_interest: f64,
}

/// Calculate the fixed monthly payment for a loan.
pub fn calculate(terms: &LoanTerms) -> CalcResult<LoanSummary> {
    let principal = check_positive("principal", terms.principal)?;
    check_non_negative("annual_rate_pct", terms.annual_rate_pct)?;
    let term_months = check_at_least_one("term_months", terms.term_months)?;

    let rate = monthly_rate(terms.annual_rate_pct);
    let payment = amortizing_payment(principal, rate, term_months);
    let total_payment = payment * term_months as f64;

    Ok(LoanSummary {
        monthly_payment: round_cents(payment),
        total_payment: round_cents(total_payment),
        total_interest: round_cents(total_payment - principal),
    })
}
