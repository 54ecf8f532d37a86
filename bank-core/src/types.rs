//! Demo banking domain types.
//!
//! These are the records served by the demo API. Monetary amounts are
//! integer cents end to end; the HTTP layer converts to decimal dollars
//! at the boundary. Timestamps are unix seconds.

use serde::{Deserialize, Serialize};

/// Product type of a demo account.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    /// Checking account.
    Checking,
    /// Savings account.
    Savings,
    /// Money market account.
    MoneyMarket,
    /// Credit card account.
    CreditCard,
}

impl AccountKind {
    /// Parse from the query-string form used by the HTTP API.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "checking" => Some(AccountKind::Checking),
            "savings" => Some(AccountKind::Savings),
            "money_market" => Some(AccountKind::MoneyMarket),
            "credit_card" => Some(AccountKind::CreditCard),
            _ => None,
        }
    }
}

/// A demo deposit account.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Account {
    /// Opaque identifier ("acc-0001").
    pub id: String,
    /// Account number.
    pub number: String,
    /// Holder display name.
    pub holder: String,
    /// Product type.
    pub kind: AccountKind,
    /// Current balance in cents.
    pub balance_cents: i64,
    /// Available balance in cents (current minus holds).
    pub available_cents: i64,
    /// When the account was opened, unix seconds.
    pub opened_at: u64,
}

/// One posted transaction on an account.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Transaction {
    /// Opaque identifier ("txn-000001").
    pub id: String,
    /// Account the transaction posted to.
    pub account_id: String,
    /// Posting time, unix seconds.
    pub timestamp: u64,
    /// Merchant or payer description.
    pub description: String,
    /// Spending category label.
    pub category: String,
    /// Signed amount in cents; debits are negative.
    pub amount_cents: i64,
    /// Running balance after posting, in cents.
    pub balance_after_cents: i64,
}

/// Settlement state of a transfer.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    /// Funds moved.
    Completed,
    /// Accepted, not yet settled.
    Pending,
    /// Declined by policy.
    Rejected,
}

/// A transfer between two demo accounts.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Transfer {
    /// Opaque identifier ("tfr-0001").
    pub id: String,
    /// Source account id.
    pub from_account: String,
    /// Destination account id.
    pub to_account: String,
    /// Amount moved, in cents.
    pub amount_cents: i64,
    /// Optional caller-supplied memo.
    pub memo: Option<String>,
    /// Settlement state.
    pub status: TransferStatus,
    /// When the transfer was made, unix seconds.
    pub timestamp: u64,
}

/// The full in-memory demo dataset. Immutable once built.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Dataset {
    /// All demo accounts.
    pub accounts: Vec<Account>,
    /// All posted transactions, oldest first per account.
    pub transactions: Vec<Transaction>,
    /// Historical transfers between demo accounts.
    pub transfers: Vec<Transfer>,
}

impl Dataset {
    /// Look up an account by id.
    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Look up a transfer by id.
    pub fn transfer(&self, id: &str) -> Option<&Transfer> {
        self.transfers.iter().find(|t| t.id == id)
    }

    /// All transactions posted to an account, in dataset order.
    pub fn transactions_for(&self, account_id: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.account_id == account_id)
            .collect()
    }
}
