//! Application state management.

use std::sync::Arc;

use bank_core::locations::Catalog;
use bank_core::{demo, Dataset};

use crate::config::Config;
use crate::policy::{ApprovalPolicy, TransferLimitPolicy};

/// Shared application state.
///
/// Everything here is read-only after startup: the catalog and dataset
/// are never mutated, so handlers share the state without locking.
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// The location directory.
    pub catalog: Catalog,
    /// The demo dataset (accounts, transactions, transfers).
    pub dataset: Dataset,
    /// Transfer approval policy.
    pub policy: Box<dyn ApprovalPolicy>,
}

impl AppState {
    /// Build application state: load or generate the demo dataset.
    pub fn new(config: Config) -> Result<Arc<Self>, Box<dyn std::error::Error>> {
        let dataset = match &config.data {
            Some(path) => {
                tracing::info!("Loading dataset from {}...", path.display());
                let text = std::fs::read_to_string(path)?;
                serde_json::from_str(&text)?
            }
            None => {
                tracing::info!("Generating dataset from seed {}...", config.seed);
                demo::generate(config.seed, &demo::Counts::default())
            }
        };

        tracing::info!(
            "Dataset ready: {} accounts, {} transactions, {} transfers",
            dataset.accounts.len(),
            dataset.transactions.len(),
            dataset.transfers.len()
        );

        let policy = Box::new(TransferLimitPolicy::new(config.transfer_limit_cents));

        Ok(Arc::new(Self {
            catalog: Catalog::builtin(),
            dataset,
            policy,
            config,
        }))
    }
}
