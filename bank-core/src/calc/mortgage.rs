//! Mortgage payment and amortization schedule calculator.

use serde::{Deserialize, Serialize};

use super::{
    amortizing_payment, check_at_least_one, check_non_negative, check_positive, monthly_rate,
    round_cents,
};
use crate::error::{CalcError, CalcResult};

/// The schedule never enumerates more than 30 years of months.
const SCHEDULE_MONTHS_MAX: u32 = 360;

/// Inputs for a mortgage calculation.
///
/// Escrow items (`property_tax`, `home_insurance`, `pmi`) are flat
/// monthly amounts added to the reported payment; they are not
/// amortized.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MortgageTerms {
    /// Purchase price of the home.
    pub home_price: f64,
    /// Down payment; the financed principal is price minus this.
    pub down_payment: f64,
    /// Annual percentage rate, as a percent (6.5 means 6.5%).
    pub annual_rate_pct: f64,
    /// Term in years.
    pub term_years: u32,
    /// Monthly property tax.
    #[serde(default)]
    pub property_tax: f64,
    /// Monthly homeowner's insurance.
    #[serde(default)]
    pub home_insurance: f64,
    /// Monthly private mortgage insurance.
    #[serde(default)]
    pub pmi: f64,
}

/// One sampled row of an amortization schedule.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AmortizationRow {
    /// Month number, starting at 1.
    pub month: u32,
    /// Principal-and-interest payment for the month.
    pub payment: f64,
    /// Portion of the payment retiring principal.
    pub principal: f64,
    /// Portion of the payment covering interest.
    pub interest: f64,
    /// Remaining balance after the payment.
    pub balance: f64,
}

/// Computed mortgage summary. All amounts rounded to cents.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MortgageSummary {
    /// Financed principal.
    pub loan_amount: f64,
    /// Monthly principal-and-interest payment.
    pub monthly_principal_interest: f64,
    /// Monthly payment including escrow add-ons.
    pub monthly_payment: f64,
    /// Principal-and-interest paid over the full term.
    pub total_payment: f64,
    /// Interest paid over the full term.
    pub total_interest: f64,
    /// Sparse amortization schedule: months 1-12, then every 12th.
    pub schedule: Vec<AmortizationRow>,
}

/// Calculate the payment and amortization schedule for a mortgage.
pub fn calculate(terms: &MortgageTerms) -> CalcResult<MortgageSummary> {
    let home_price = check_positive("home_price", terms.home_price)?;
    let down_payment = check_non_negative("down_payment", terms.down_payment)?;
    check_non_negative("annual_rate_pct", terms.annual_rate_pct)?;
    check_at_least_one("term_years", terms.term_years)?;
    let property_tax = check_non_negative("property_tax", terms.property_tax)?;
    let home_insurance = check_non_negative("home_insurance", terms.home_insurance)?;
    let pmi = check_non_negative("pmi", terms.pmi)?;

    if down_payment >= home_price {
        return Err(CalcError::OutOfRange {
            field: "down_payment",
            requirement: "must be less than home_price",
        });
    }

    let principal = home_price - down_payment;
    let rate = monthly_rate(terms.annual_rate_pct);
    let num_payments = terms.term_years * 12;

    let payment = amortizing_payment(principal, rate, num_payments);
    let total_payment = payment * num_payments as f64;
    let total_interest = total_payment - principal;

    Ok(MortgageSummary {
        loan_amount: round_cents(principal),
        monthly_principal_interest: round_cents(payment),
        monthly_payment: round_cents(payment + property_tax + home_insurance + pmi),
        total_payment: round_cents(total_payment),
        total_interest: round_cents(total_interest),
        schedule: schedule(principal, rate, payment, num_payments),
    })
}

/// Walk the amortization month by month, emitting rows for the first
/// year and every year boundary after that. Keeps a 30-year schedule at
/// 41 rows instead of 360.
fn schedule(principal: f64, rate: f64, payment: f64, num_payments: u32) -> Vec<AmortizationRow> {
    let mut rows = Vec::new();
    let mut balance = principal;

    for month in 1..=num_payments.min(SCHEDULE_MONTHS_MAX) {
        let interest = balance * rate;
        let toward_principal = payment - interest;
        balance -= toward_principal;

        if month <= 12 || month % 12 == 0 {
            rows.push(AmortizationRow {
                month,
                payment: round_cents(payment),
                principal: round_cents(toward_principal),
                interest: round_cents(interest),
                balance: round_cents(balance.max(0.0)),
            });
        }
    }

    rows
}
