//! Financial calculators.
//!
//! Three independent calculator families, all pure and deterministic:
//! mortgage amortization ([`mortgage`]), auto/personal loan payments
//! ([`loan`]), and compound-interest savings projection ([`savings`]).
//!
//! Inputs are validated up front and rejected with a [`CalcError`]
//! rather than ever producing NaN or infinity in a result. Terms are
//! denominated in months throughout; only the mortgage HTTP surface
//! accepts years and converts before reaching this module.

pub mod loan;
pub mod mortgage;
pub mod savings;

pub use loan::{LoanSummary, LoanTerms};
pub use mortgage::{AmortizationRow, MortgageSummary, MortgageTerms};
pub use savings::{SavingsPlan, SavingsProjection};

use crate::error::{CalcError, CalcResult};

/// Round to two decimal places, half away from zero (half-up at the
/// cent for the positive amounts produced here).
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Periodic rate for an annual percentage rate compounded monthly.
pub(crate) fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 100.0 / 12.0
}

/// Fixed payment that retires `principal` over `periods` payments at
/// `rate` per period. A zero rate degenerates the closed-form formula
/// to division by zero and is handled as straight principal division.
pub(crate) fn amortizing_payment(principal: f64, rate: f64, periods: u32) -> f64 {
    if rate == 0.0 {
        return principal / periods as f64;
    }
    let growth = (1.0 + rate).powi(periods as i32);
    principal * rate * growth / (growth - 1.0)
}

pub(crate) fn check_finite(field: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFinite { field })
    }
}

pub(crate) fn check_positive(field: &'static str, value: f64) -> CalcResult<f64> {
    check_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::OutOfRange {
            field,
            requirement: "must be greater than zero",
        })
    }
}

pub(crate) fn check_non_negative(field: &'static str, value: f64) -> CalcResult<f64> {
    check_finite(field, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(CalcError::OutOfRange {
            field,
            requirement: "must not be negative",
        })
    }
}

pub(crate) fn check_at_least_one(field: &'static str, value: u32) -> CalcResult<u32> {
    if value >= 1 {
        Ok(value)
    } else {
        Err(CalcError::OutOfRange {
            field,
            requirement: "must be at least 1",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_cents_half_up() {
        // 0.125 is exact in binary, so the half-cent genuinely rounds up.
        assert_eq!(round_cents(0.125), 0.13);
        assert_eq!(round_cents(1.004), 1.0);
        assert_eq!(round_cents(2.675000001), 2.68);
        assert_eq!(round_cents(1000.0), 1000.0);
    }

    #[test]
    fn test_amortizing_payment_zero_rate() {
        assert_eq!(amortizing_payment(12_000.0, 0.0, 12), 1_000.0);
    }

    #[test]
    fn test_amortizing_payment_positive_rate() {
        // 1000 over 12 months at 1%/month: the classic annuity value.
        let payment = amortizing_payment(1_000.0, 0.01, 12);
        assert!((payment - 88.8488).abs() < 1e-3, "got {}", payment);
    }

    #[test]
    fn test_check_positive_rejects_zero_and_nan() {
        assert!(check_positive("principal", 0.0).is_err());
        assert!(check_positive("principal", f64::NAN).is_err());
        assert!(check_positive("principal", f64::INFINITY).is_err());
        assert_eq!(check_positive("principal", 5.0), Ok(5.0));
    }

    #[test]
    fn test_check_non_negative() {
        assert_eq!(check_non_negative("rate", 0.0), Ok(0.0));
        assert!(check_non_negative("rate", -0.1).is_err());
    }
}
