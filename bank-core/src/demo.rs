//! Deterministic demo dataset generator.
//!
//! Generates random-looking accounts, transaction histories, and
//! transfers from a seed: the same seed always produces the same
//! dataset, so tests and the demo server stay reproducible while still
//! looking lived-in.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Account, AccountKind, Dataset, Transaction, Transfer, TransferStatus};

/// Fixed "now" for generated timestamps. Everything is dated relative
/// to this so a dataset does not change between runs.
const DATASET_EPOCH: u64 = 1_755_000_000;

/// Average seconds between generated transactions.
const TRANSACTION_SPACING: u64 = 86_400 * 2;

/// How many of each record to generate.
#[derive(Clone, Copy, Debug)]
pub struct Counts {
    /// Number of accounts.
    pub accounts: u32,
    /// Transactions generated per account.
    pub transactions_per_account: u32,
    /// Historical transfers between accounts.
    pub transfers: u32,
}

impl Default for Counts {
    fn default() -> Self {
        Self {
            accounts: 8,
            transactions_per_account: 30,
            transfers: 12,
        }
    }
}

const HOLDERS: &[&str] = &[
    "Sarah Johnson",
    "Michael Chen",
    "Emily Rodriguez",
    "David Kim",
    "Jessica Taylor",
    "James Okafor",
    "Maria Santos",
    "Robert Nguyen",
    "Linda Park",
    "Thomas Rivera",
];

/// Debit descriptions with their category labels.
const DEBITS: &[(&str, &str)] = &[
    ("Blue Bottle Coffee", "Dining"),
    ("Whole Foods Market", "Groceries"),
    ("Shell Oil", "Transportation"),
    ("Netflix.com", "Entertainment"),
    ("PG&E Utility Payment", "Utilities"),
    ("Walgreens", "Health"),
    ("Amazon Marketplace", "Shopping"),
    ("Chipotle Mexican Grill", "Dining"),
    ("Clipper Transit", "Transportation"),
    ("Rent Payment", "Housing"),
];

/// Credit descriptions with their category labels.
const CREDITS: &[(&str, &str)] = &[
    ("Payroll Deposit - Acme Corp", "Income"),
    ("Mobile Check Deposit", "Deposit"),
    ("Zelle Payment Received", "Transfer"),
    ("Interest Payment", "Interest"),
];

const MEMOS: &[&str] = &["Rent split", "Dinner", "Thanks!", "Monthly savings"];

fn account_kind(index: u32) -> AccountKind {
    match index % 5 {
        0 | 1 => AccountKind::Checking,
        2 => AccountKind::Savings,
        3 => AccountKind::MoneyMarket,
        _ => AccountKind::CreditCard,
    }
}

/// Generate a dataset from a seed.
///
/// Transfers need at least two accounts to pick distinct endpoints.
pub fn generate(seed: u64, counts: &Counts) -> Dataset {
    assert!(
        counts.transfers == 0 || counts.accounts >= 2,
        "Need at least 2 accounts for transfers"
    );

    let mut rng = StdRng::seed_from_u64(seed);

    let mut accounts = Vec::with_capacity(counts.accounts as usize);
    let mut transactions = Vec::new();
    let mut transaction_seq: u32 = 0;

    for i in 0..counts.accounts {
        let id = format!("acc-{:04}", i + 1);
        let holder = HOLDERS[i as usize % HOLDERS.len()].to_string();
        let number: String = (0..10).map(|_| rng.gen_range(b'0'..=b'9') as char).collect();

        let history_span = counts.transactions_per_account as u64 * TRANSACTION_SPACING;
        let opened_at = DATASET_EPOCH - history_span - rng.gen_range(0..86_400 * 365);

        let mut balance: i64 = rng.gen_range(50_000..2_500_000);

        for t in 0..counts.transactions_per_account {
            transaction_seq += 1;
            let remaining = (counts.transactions_per_account - t) as u64;
            let timestamp = DATASET_EPOCH - remaining * TRANSACTION_SPACING
                + rng.gen_range(0..TRANSACTION_SPACING / 2);

            // Roughly two debits for every credit; never overdraw.
            let debit = rng.gen_range(0..3) < 2 && balance > 25_000;
            let (description, category, amount_cents) = if debit {
                let (description, category) = DEBITS[rng.gen_range(0..DEBITS.len())];
                (description, category, -rng.gen_range(500..25_000))
            } else {
                let (description, category) = CREDITS[rng.gen_range(0..CREDITS.len())];
                (description, category, rng.gen_range(10_000..300_000))
            };

            balance += amount_cents;
            transactions.push(Transaction {
                id: format!("txn-{:06}", transaction_seq),
                account_id: id.clone(),
                timestamp,
                description: description.to_string(),
                category: category.to_string(),
                amount_cents,
                balance_after_cents: balance,
            });
        }

        let hold = rng.gen_range(0..10_000);
        accounts.push(Account {
            id,
            number,
            holder,
            kind: account_kind(i),
            balance_cents: balance,
            available_cents: (balance - hold).max(0),
            opened_at,
        });
    }

    let mut transfers = Vec::with_capacity(counts.transfers as usize);
    for i in 0..counts.transfers {
        // Pick distinct endpoints.
        let from = rng.gen_range(0..accounts.len());
        let mut to = rng.gen_range(0..accounts.len());
        while to == from {
            to = rng.gen_range(0..accounts.len());
        }

        let memo = if rng.gen_bool(0.5) {
            Some(MEMOS[rng.gen_range(0..MEMOS.len())].to_string())
        } else {
            None
        };

        transfers.push(Transfer {
            id: format!("tfr-{:04}", i + 1),
            from_account: accounts[from].id.clone(),
            to_account: accounts[to].id.clone(),
            amount_cents: rng.gen_range(1_000..150_000),
            memo,
            status: TransferStatus::Completed,
            timestamp: DATASET_EPOCH - rng.gen_range(0..86_400 * 30),
        });
    }

    Dataset {
        accounts,
        transactions,
        transfers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_accounts() {
        let dataset = generate(1, &Counts::default());

        assert_eq!(dataset.accounts.len(), 8);
        for account in &dataset.accounts {
            assert!(account.id.starts_with("acc-"));
            assert_eq!(account.number.len(), 10);
            assert!(account.balance_cents >= 0);
            assert!(account.available_cents <= account.balance_cents);
            assert!(account.opened_at < DATASET_EPOCH);
        }

        // Ids are unique
        let mut ids: Vec<&str> = dataset.accounts.iter().map(|a| a.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), dataset.accounts.len());
    }

    #[test]
    fn test_transactions_keep_running_balance() {
        let dataset = generate(2, &Counts::default());

        for account in &dataset.accounts {
            let history = dataset.transactions_for(&account.id);
            assert_eq!(history.len(), 30);

            let mut previous_timestamp = 0;
            for window in history.windows(2) {
                assert_eq!(
                    window[0].balance_after_cents + window[1].amount_cents,
                    window[1].balance_after_cents
                );
                assert!(window[0].timestamp >= previous_timestamp);
                previous_timestamp = window[0].timestamp;
            }

            // The account balance is where the history ends.
            assert_eq!(
                history.last().unwrap().balance_after_cents,
                account.balance_cents
            );
        }
    }

    #[test]
    fn test_transfers_connect_distinct_accounts() {
        let dataset = generate(3, &Counts::default());

        assert_eq!(dataset.transfers.len(), 12);
        for transfer in &dataset.transfers {
            assert_ne!(transfer.from_account, transfer.to_account);
            assert!(dataset.account(&transfer.from_account).is_some());
            assert!(dataset.account(&transfer.to_account).is_some());
            assert!(transfer.amount_cents > 0);
            assert_eq!(transfer.status, TransferStatus::Completed);
        }
    }

    #[test]
    fn test_same_seed_same_dataset() {
        let a = generate(42, &Counts::default());
        let b = generate(42, &Counts::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate(1, &Counts::default());
        let b = generate(2, &Counts::default());
        assert_ne!(a, b);
    }

    #[test]
    #[should_panic(expected = "Need at least 2 accounts")]
    fn test_transfers_require_two_accounts() {
        generate(
            1,
            &Counts {
                accounts: 1,
                transactions_per_account: 0,
                transfers: 1,
            },
        );
    }
}
