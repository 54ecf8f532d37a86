//! JSON-serializable API request/response types.
//!
//! Monetary amounts cross the wire as decimal dollars; the dataset
//! keeps integer cents. Conversion happens here and nowhere else.

use bank_core::calc::{round_cents, LoanTerms, MortgageTerms, SavingsPlan};
use bank_core::locations::{Hours, Location, LocationKind, Nearby};
use bank_core::verify::Verification;
use bank_core::{Account, AccountKind, Transaction, Transfer, TransferStatus};
use serde::{Deserialize, Serialize};

/// Integer cents to decimal dollars.
pub fn dollars(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Account response type.
#[derive(Debug, Serialize)]
pub struct ApiAccount {
    pub id: String,
    pub number: String,
    pub holder: String,
    pub kind: AccountKind,
    pub balance: f64,
    pub available: f64,
    pub opened_at: u64,
}

impl From<&Account> for ApiAccount {
    fn from(a: &Account) -> Self {
        Self {
            id: a.id.clone(),
            number: a.number.clone(),
            holder: a.holder.clone(),
            kind: a.kind,
            balance: dollars(a.balance_cents),
            available: dollars(a.available_cents),
            opened_at: a.opened_at,
        }
    }
}

/// Transaction response type.
#[derive(Debug, Serialize)]
pub struct ApiTransaction {
    pub id: String,
    pub account_id: String,
    pub timestamp: u64,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub balance_after: f64,
}

impl From<&Transaction> for ApiTransaction {
    fn from(t: &Transaction) -> Self {
        Self {
            id: t.id.clone(),
            account_id: t.account_id.clone(),
            timestamp: t.timestamp,
            description: t.description.clone(),
            category: t.category.clone(),
            amount: dollars(t.amount_cents),
            balance_after: dollars(t.balance_after_cents),
        }
    }
}

/// Transfer response type.
#[derive(Debug, Serialize)]
pub struct ApiTransfer {
    pub id: String,
    pub from_account: String,
    pub to_account: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    pub status: TransferStatus,
    pub timestamp: u64,
}

impl From<&Transfer> for ApiTransfer {
    fn from(t: &Transfer) -> Self {
        Self {
            id: t.id.clone(),
            from_account: t.from_account.clone(),
            to_account: t.to_account.clone(),
            amount: dollars(t.amount_cents),
            memo: t.memo.clone(),
            status: t.status,
            timestamp: t.timestamp,
        }
    }
}

/// Location response type. `distance_miles` is present only on
/// proximity search results.
#[derive(Debug, Serialize)]
pub struct ApiLocation {
    pub id: String,
    pub kind: LocationKind,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub hours: Vec<Hours>,
    pub services: Vec<String>,
    pub features: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,
}

impl From<&Location> for ApiLocation {
    fn from(l: &Location) -> Self {
        Self {
            id: l.id.clone(),
            kind: l.kind,
            name: l.name.clone(),
            address: l.address.clone(),
            city: l.city.clone(),
            state: l.state.clone(),
            zip: l.zip.clone(),
            phone: l.phone.clone(),
            hours: l.hours.clone(),
            services: l.services.clone(),
            features: l.features.clone(),
            latitude: l.latitude,
            longitude: l.longitude,
            distance_miles: None,
        }
    }
}

impl From<&Nearby<'_>> for ApiLocation {
    fn from(n: &Nearby<'_>) -> Self {
        let mut location = ApiLocation::from(n.location);
        location.distance_miles = Some(round_cents(n.distance_miles));
        location
    }
}

/// Accounts listing response.
#[derive(Debug, Serialize)]
pub struct AccountsResponse {
    pub accounts: Vec<ApiAccount>,
}

/// Current balance for one account.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub account_id: String,
    pub balance: f64,
    pub available: f64,
    /// Timestamp of the newest posted transaction.
    pub as_of: u64,
}

/// Paginated transactions response.
#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<ApiTransaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_timestamp: Option<u64>,
}

/// Transfers listing response.
#[derive(Debug, Serialize)]
pub struct TransfersResponse {
    pub transfers: Vec<ApiTransfer>,
}

/// Proximity search response.
#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub locations: Vec<ApiLocation>,
}

/// Body for `POST /api/v1/transfers`.
#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    pub from_account: String,
    pub to_account: String,
    /// Amount in dollars.
    pub amount: f64,
    #[serde(default)]
    pub memo: Option<String>,
}

/// Receipt for a requested transfer. Nothing is persisted; the receipt
/// is the whole outcome.
#[derive(Debug, Serialize)]
pub struct TransferReceipt {
    pub id: String,
    pub from_account: String,
    pub to_account: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    pub status: TransferStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub timestamp: u64,
}

/// Body for `POST /api/v1/calculators`, dispatched on `type`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CalculatorRequest {
    /// Mortgage with amortization schedule; term in years.
    Mortgage(MortgageTerms),
    /// Auto loan; term in months.
    Auto(LoanTerms),
    /// Personal loan; term in months.
    Personal(LoanTerms),
    /// Savings projection.
    Savings(SavingsPlan),
}

/// Body for `POST /api/v1/verify`.
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    pub routing_number: String,
}

/// Verification verdict response.
#[derive(Debug, Serialize)]
pub struct ApiVerification {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub known_account: Option<bool>,
}

impl From<&Verification> for ApiVerification {
    fn from(v: &Verification) -> Self {
        match v {
            Verification::Verified(account) => Self {
                valid: true,
                reason: None,
                bank_name: Some(account.bank_name.clone()),
                account_holder: Some(account.account_holder.clone()),
                account_type: Some(account.account_type),
                known_account: Some(account.known_account),
            },
            Verification::Rejected(reason) => Self {
                valid: false,
                reason: Some(reason.to_string()),
                bank_name: None,
                account_holder: None,
                account_type: None,
                known_account: None,
            },
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub accounts: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dollars_conversion() {
        assert_eq!(dollars(125_050), 1_250.5);
        assert_eq!(dollars(-500), -5.0);
        assert_eq!(dollars(0), 0.0);
    }

    #[test]
    fn test_calculator_request_dispatch_tag() {
        let body = r#"{"type":"auto","principal":30000,"annual_rate_pct":7.0,"term_months":60}"#;
        let request: CalculatorRequest = serde_json::from_str(body).unwrap();
        assert!(matches!(request, CalculatorRequest::Auto(_)));

        let body = r#"{"type":"mortgage","home_price":500000,"down_payment":100000,"annual_rate_pct":6.5,"term_years":30}"#;
        let request: CalculatorRequest = serde_json::from_str(body).unwrap();
        assert!(matches!(request, CalculatorRequest::Mortgage(_)));

        let body = r#"{"type":"roulette"}"#;
        assert!(serde_json::from_str::<CalculatorRequest>(body).is_err());
    }

    #[test]
    fn test_verification_serializes_verdict() {
        use bank_core::verify::{verify_account, BankChecks};

        let verdict = verify_account("12345678", "121000248", &BankChecks::default());
        let api = ApiVerification::from(&verdict);
        assert!(api.valid);
        assert_eq!(api.bank_name.as_deref(), Some("Wells Fargo Bank"));

        let verdict = verify_account("12345678", "999999999", &BankChecks::default());
        let api = ApiVerification::from(&verdict);
        assert!(!api.valid);
        assert_eq!(api.reason.as_deref(), Some("routing not found"));
    }
}
