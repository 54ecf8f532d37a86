//! Compound-interest savings projection.

use serde::{Deserialize, Serialize};

use super::{check_at_least_one, check_non_negative, monthly_rate, round_cents};
use crate::error::CalcResult;

/// Inputs for a savings projection.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SavingsPlan {
    /// Opening balance.
    pub initial_deposit: f64,
    /// Contribution added at the end of each month.
    pub monthly_contribution: f64,
    /// Annual percentage yield, as a percent.
    pub annual_rate_pct: f64,
    /// Projection horizon in years.
    pub years: u32,
}

/// Computed savings projection. All amounts rounded to cents.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SavingsProjection {
    /// Balance at the end of the horizon.
    pub final_balance: f64,
    /// Everything paid in, including the initial deposit.
    pub total_contributions: f64,
    /// Interest earned over the horizon.
    pub total_interest: f64,
}

/// Project a savings balance month by month.
///
/// Each month accrues interest on the running balance, then adds the
/// contribution.
pub fn project(plan: &SavingsPlan) -> CalcResult<SavingsProjection> {
    let initial = check_non_negative("initial_deposit", plan.initial_deposit)?;
    let contribution = check_non_negative("monthly_contribution", plan.monthly_contribution)?;
    check_non_negative("annual_rate_pct", plan.annual_rate_pct)?;
    let years = check_at_least_one("years", plan.years)?;

    let rate = monthly_rate(plan.annual_rate_pct);
    let months = years * 12;

    let mut balance = initial;
    let mut total_interest = 0.0;

    for _ in 0..months {
        let interest = balance * rate;
        balance += interest + contribution;
        total_interest += interest;
    }

    Ok(SavingsProjection {
        final_balance: round_cents(balance),
        total_contributions: round_cents(initial + contribution * months as f64),
        total_interest: round_cents(total_interest),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rate_is_sum_of_contributions() {
        let projection = project(&SavingsPlan {
            initial_deposit: 0.0,
            monthly_contribution: 100.0,
            annual_rate_pct: 0.0,
            years: 2,
        })
        .unwrap();

        assert_eq!(projection.final_balance, 2_400.0);
        assert_eq!(projection.total_contributions, 2_400.0);
        assert_eq!(projection.total_interest, 0.0);
    }

    #[test]
    fn test_compounding_single_deposit() {
        // 1000 at 12% compounded monthly for one year: 1000 * 1.01^12.
        let projection = project(&SavingsPlan {
            initial_deposit: 1_000.0,
            monthly_contribution: 0.0,
            annual_rate_pct: 12.0,
            years: 1,
        })
        .unwrap();

        assert!((projection.final_balance - 1_126.83).abs() < 0.01, "got {}", projection.final_balance);
        assert!((projection.total_interest - 126.83).abs() < 0.01);
    }

    #[test]
    fn test_balance_monotone_over_horizons() {
        // Growing the horizon never shrinks the balance when rate and
        // contribution are non-negative.
        let mut previous = 0.0;
        for years in 1..=10 {
            let projection = project(&SavingsPlan {
                initial_deposit: 500.0,
                monthly_contribution: 50.0,
                annual_rate_pct: 4.0,
                years,
            })
            .unwrap();
            assert!(projection.final_balance > previous);
            previous = projection.final_balance;
        }
    }

    #[test]
    fn test_interest_consistent_with_balance() {
        let projection = project(&SavingsPlan {
            initial_deposit: 2_500.0,
            monthly_contribution: 200.0,
            annual_rate_pct: 5.0,
            years: 5,
        })
        .unwrap();

        assert!(
            (projection.final_balance
                - (projection.total_contributions + projection.total_interest))
                .abs()
                < 0.02
        );
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(project(&SavingsPlan {
            initial_deposit: -1.0,
            monthly_contribution: 0.0,
            annual_rate_pct: 1.0,
            years: 1,
        })
        .is_err());
        assert!(project(&SavingsPlan {
            initial_deposit: 0.0,
            monthly_contribution: 0.0,
            annual_rate_pct: 1.0,
            years: 0,
        })
        .is_err());
    }
}
