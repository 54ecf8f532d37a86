//! Account route handlers.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use bank_core::AccountKind;
use serde::Deserialize;

use crate::api::{
    dollars, AccountsResponse, ApiAccount, ApiTransaction, BalanceResponse, TransactionsResponse,
};
use crate::error::AppError;
use crate::state::AppState;

fn default_limit() -> usize {
    100
}

/// Query parameters for listing accounts.
#[derive(Debug, Deserialize)]
pub struct ListAccountsParams {
    /// Filter by account kind (checking, savings, ...).
    pub kind: Option<String>,
    /// Maximum number of results.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

/// List demo accounts with optional filters.
pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListAccountsParams>,
) -> Result<Json<AccountsResponse>, AppError> {
    let kind = match &params.kind {
        Some(s) => Some(
            AccountKind::parse(s)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown account kind: {}", s)))?,
        ),
        None => None,
    };

    let accounts: Vec<ApiAccount> = state
        .dataset
        .accounts
        .iter()
        .filter(|a| kind.map_or(true, |k| a.kind == k))
        .take(params.limit)
        .map(ApiAccount::from)
        .collect();

    Ok(Json(AccountsResponse { accounts }))
}

/// Get a single account by ID.
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiAccount>, AppError> {
    let account = state
        .dataset
        .account(&id)
        .ok_or_else(|| AppError::NotFound(format!("Account {} not found", id)))?;

    Ok(Json(ApiAccount::from(account)))
}

/// Get the current balance for an account.
pub async fn get_account_balance(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<BalanceResponse>, AppError> {
    let account = state
        .dataset
        .account(&id)
        .ok_or_else(|| AppError::NotFound(format!("Account {} not found", id)))?;

    let as_of = state
        .dataset
        .transactions_for(&id)
        .last()
        .map(|t| t.timestamp)
        .unwrap_or(account.opened_at);

    Ok(Json(BalanceResponse {
        account_id: account.id.clone(),
        balance: dollars(account.balance_cents),
        available: dollars(account.available_cents),
        as_of,
    }))
}

/// Query parameters for account transactions.
#[derive(Debug, Deserialize)]
pub struct AccountTransactionsParams {
    /// Maximum number of results.
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Return in reverse chronological order.
    #[serde(default)]
    pub reversed: bool,
    /// Pagination: start after this timestamp.
    pub after_timestamp: Option<u64>,
}

/// Get transactions for an account.
pub async fn get_account_transactions(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<AccountTransactionsParams>,
) -> Result<Json<TransactionsResponse>, AppError> {
    if state.dataset.account(&id).is_none() {
        return Err(AppError::NotFound(format!("Account {} not found", id)));
    }

    let mut history = state.dataset.transactions_for(&id);
    if let Some(after) = params.after_timestamp {
        history.retain(|t| t.timestamp > after);
    }
    if params.reversed {
        history.reverse();
    }
    history.truncate(params.limit);

    let next_timestamp = history.last().map(|t| t.timestamp);
    let transactions: Vec<ApiTransaction> =
        history.into_iter().map(ApiTransaction::from).collect();

    Ok(Json(TransactionsResponse {
        transactions,
        next_timestamp,
    }))
}
