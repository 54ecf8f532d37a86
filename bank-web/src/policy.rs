//! Transfer approval policy.
//!
//! Whether a transfer goes through is an explicit decision made by an
//! injected policy, not something the handler decides inline. The demo
//! ships a flat per-transfer limit; a real deployment would put risk
//! scoring behind the same trait.

use bank_core::Account;

/// Outcome of an approval decision.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Decision {
    /// The transfer may proceed.
    Approved,
    /// The transfer is declined.
    Declined {
        /// Human-readable decline reason.
        reason: String,
    },
}

/// Decides whether a requested transfer is allowed.
pub trait ApprovalPolicy: Send + Sync {
    /// Decide on a transfer of `amount_cents` from `from` to `to`.
    fn decide(&self, from: &Account, to: &Account, amount_cents: i64) -> Decision;
}

/// Approves transfers up to a flat per-transfer limit, funds allowing.
pub struct TransferLimitPolicy {
    limit_cents: i64,
}

impl TransferLimitPolicy {
    /// Policy with the given per-transfer cap in cents.
    pub fn new(limit_cents: i64) -> Self {
        Self { limit_cents }
    }
}

impl ApprovalPolicy for TransferLimitPolicy {
    fn decide(&self, from: &Account, _to: &Account, amount_cents: i64) -> Decision {
        if amount_cents > self.limit_cents {
            return Decision::Declined {
                reason: format!(
                    "amount exceeds the per-transfer limit of {:.2}",
                    self.limit_cents as f64 / 100.0
                ),
            };
        }
        if amount_cents > from.available_cents {
            return Decision::Declined {
                reason: "insufficient available funds".to_string(),
            };
        }
        Decision::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bank_core::AccountKind;

    fn account(available_cents: i64) -> Account {
        Account {
            id: "acc-0001".to_string(),
            number: "1234567890".to_string(),
            holder: "Sarah Johnson".to_string(),
            kind: AccountKind::Checking,
            balance_cents: available_cents,
            available_cents,
            opened_at: 1_700_000_000,
        }
    }

    #[test]
    fn test_approves_within_limit_and_funds() {
        let policy = TransferLimitPolicy::new(1_000_000);
        let from = account(500_000);
        let to = account(0);
        assert_eq!(policy.decide(&from, &to, 250_000), Decision::Approved);
    }

    #[test]
    fn test_declines_over_limit() {
        let policy = TransferLimitPolicy::new(100_000);
        let from = account(500_000);
        let to = account(0);
        assert!(matches!(
            policy.decide(&from, &to, 100_001),
            Decision::Declined { .. }
        ));
    }

    #[test]
    fn test_declines_insufficient_funds() {
        let policy = TransferLimitPolicy::new(1_000_000);
        let from = account(100);
        let to = account(0);
        assert!(matches!(
            policy.decide(&from, &to, 200),
            Decision::Declined { reason } if reason.contains("insufficient")
        ));
    }
}
