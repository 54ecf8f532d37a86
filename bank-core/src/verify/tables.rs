//! Static lookup tables for account verification.
//!
//! Demo data: a handful of ABA routing numbers and the demo account
//! holders. Never mutated at runtime.

use crate::types::AccountKind;

/// Routing number → bank name.
pub(super) const ROUTING_DIRECTORY: &[(&str, &str)] = &[
    ("121000248", "Wells Fargo Bank"),
    ("121042882", "Wells Fargo Bank"),
    ("021000021", "JPMorgan Chase Bank"),
    ("322271627", "JPMorgan Chase Bank"),
    ("026009593", "Bank of America"),
    ("011401533", "Citizens Bank"),
    ("031101279", "The Bancorp Bank"),
];

/// Account number → (holder name, account type).
pub(super) const ACCOUNT_DIRECTORY: &[(&str, &str, AccountKind)] = &[
    ("12345678", "Sarah Johnson", AccountKind::Checking),
    ("87654321", "Michael Chen", AccountKind::Savings),
    ("11223344", "Emily Rodriguez", AccountKind::Checking),
    ("55667788", "David Kim", AccountKind::Savings),
    ("24681357", "Jessica Taylor", AccountKind::Checking),
];

pub(super) fn bank_for_routing(routing_number: &str) -> Option<&'static str> {
    ROUTING_DIRECTORY
        .iter()
        .find(|(routing, _)| *routing == routing_number)
        .map(|(_, bank)| *bank)
}

pub(super) fn holder_for_account(account_number: &str) -> Option<(&'static str, AccountKind)> {
    ACCOUNT_DIRECTORY
        .iter()
        .find(|(account, _, _)| *account == account_number)
        .map(|(_, holder, kind)| (*holder, *kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing_numbers_are_well_formed() {
        for (routing, bank) in ROUTING_DIRECTORY {
            assert_eq!(routing.len(), 9);
            assert!(routing.bytes().all(|b| b.is_ascii_digit()));
            assert!(!bank.is_empty());
        }
    }

    #[test]
    fn test_account_numbers_are_well_formed() {
        for (account, holder, _) in ACCOUNT_DIRECTORY {
            assert!((4..=17).contains(&account.len()));
            assert!(account.bytes().all(|b| b.is_ascii_digit()));
            assert!(!holder.is_empty());
        }
    }

    #[test]
    fn test_lookups() {
        assert_eq!(bank_for_routing("121000248"), Some("Wells Fargo Bank"));
        assert_eq!(bank_for_routing("999999999"), None);
        assert_eq!(
            holder_for_account("12345678"),
            Some(("Sarah Johnson", AccountKind::Checking))
        );
        assert_eq!(holder_for_account("00000001"), None);
    }
}
