//! Account and routing number verification.
//!
//! A single verification entry point backed by static lookup tables.
//! Checks run in a fixed order and the first failure wins; failures are
//! verdicts ([`Verification::Rejected`]), not errors, since every one of
//! them is caller-input-shaped.
//!
//! An account number that passes the format and routing checks but is
//! absent from the holder table still verifies, with a placeholder
//! identity. The verdict carries [`VerifiedAccount::known_account`] so
//! callers can tell the two apart.

mod tables;

use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::types::AccountKind;

/// Holder identity used when the account number is not in the table.
const PLACEHOLDER_HOLDER: &str = "Account Holder";

/// Optional bank-specific checks layered on top of the standard ones.
#[derive(Clone, Debug, Default)]
pub struct BankChecks {
    /// Accepted account-number length, if the bank constrains it beyond
    /// the 4-17 digit format rule.
    pub account_length: Option<RangeInclusive<usize>>,
}

impl BankChecks {
    /// The stricter profile: account numbers must be 8-12 digits.
    pub fn strict() -> Self {
        Self {
            account_length: Some(8..=12),
        }
    }
}

/// Why a verification was rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Account number missing or empty.
    MissingAccountNumber,
    /// Routing number missing or empty.
    MissingRoutingNumber,
    /// Routing number is not exactly 9 digits.
    MalformedRoutingNumber,
    /// Account number is not 4-17 digits.
    MalformedAccountNumber,
    /// Routing number absent from the routing directory.
    RoutingNotFound,
    /// Account number length outside the bank-specific bound.
    AccountLengthNotAccepted,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::MissingAccountNumber => write!(f, "account number is required"),
            RejectReason::MissingRoutingNumber => write!(f, "routing number is required"),
            RejectReason::MalformedRoutingNumber => {
                write!(f, "routing number must be exactly 9 digits")
            }
            RejectReason::MalformedAccountNumber => {
                write!(f, "account number must be 4 to 17 digits")
            }
            RejectReason::RoutingNotFound => write!(f, "routing not found"),
            RejectReason::AccountLengthNotAccepted => {
                write!(f, "account number length not accepted by this bank")
            }
        }
    }
}

/// Metadata returned with a successful verification.
#[derive(Clone, Debug, Serialize)]
pub struct VerifiedAccount {
    /// Bank owning the routing number.
    pub bank_name: String,
    /// Account holder name, or the placeholder.
    pub account_holder: String,
    /// Account type, checking when unknown.
    pub account_type: AccountKind,
    /// Whether the account number was actually in the holder table.
    pub known_account: bool,
}

/// Outcome of a verification.
#[derive(Clone, Debug)]
pub enum Verification {
    /// Routing and account number passed every check.
    Verified(VerifiedAccount),
    /// One of the checks failed.
    Rejected(RejectReason),
}

impl Verification {
    /// Whether the verdict is positive.
    pub fn is_valid(&self) -> bool {
        matches!(self, Verification::Verified(_))
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Verify an account/routing number pair against the static directories.
///
/// Check order: presence, routing format, account format, routing
/// directory membership, optional bank-specific length bound, holder
/// lookup. Format failures reject before any table is consulted.
pub fn verify_account(
    account_number: &str,
    routing_number: &str,
    checks: &BankChecks,
) -> Verification {
    if account_number.is_empty() {
        return Verification::Rejected(RejectReason::MissingAccountNumber);
    }
    if routing_number.is_empty() {
        return Verification::Rejected(RejectReason::MissingRoutingNumber);
    }
    if routing_number.len() != 9 || !all_digits(routing_number) {
        return Verification::Rejected(RejectReason::MalformedRoutingNumber);
    }
    if !(4..=17).contains(&account_number.len()) || !all_digits(account_number) {
        return Verification::Rejected(RejectReason::MalformedAccountNumber);
    }

    let Some(bank_name) = tables::bank_for_routing(routing_number) else {
        return Verification::Rejected(RejectReason::RoutingNotFound);
    };

    if let Some(bound) = &checks.account_length {
        if !bound.contains(&account_number.len()) {
            return Verification::Rejected(RejectReason::AccountLengthNotAccepted);
        }
    }

    let (account_holder, account_type, known_account) =
        match tables::holder_for_account(account_number) {
            Some((holder, kind)) => (holder, kind, true),
            None => (PLACEHOLDER_HOLDER, AccountKind::Checking, false),
        };

    Verification::Verified(VerifiedAccount {
        bank_name: bank_name.to_string(),
        account_holder: account_holder.to_string(),
        account_type,
        known_account,
    })
}
