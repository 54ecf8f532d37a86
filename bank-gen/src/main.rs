//! Demo dataset generator for Demobank.
//!
//! Generates the accounts, transaction histories, and transfers served
//! by bank-web. The same seed always produces the same dataset.
//!
//! # Usage
//!
//! ```bash
//! # Print a dataset to stdout
//! bank-gen --accounts 20 --transactions 50 --seed 7
//!
//! # Write a dataset for bank-web --data
//! bank-gen --accounts 20 --output dataset.json
//! bank-web --data dataset.json
//! ```

use std::fs;
use std::path::PathBuf;

use bank_core::demo::{self, Counts};
use clap::Parser;

/// Demo dataset generator for Demobank
#[derive(Parser, Debug)]
#[command(name = "bank-gen")]
#[command(about = "Generate a demo dataset for bank-web")]
struct Args {
    /// Number of accounts to generate
    #[arg(long, default_value_t = 8)]
    accounts: u32,

    /// Transactions per account
    #[arg(long, default_value_t = 30)]
    transactions: u32,

    /// Number of historical transfers
    #[arg(long, default_value_t = 12)]
    transfers: u32,

    /// Generator seed; the same seed reproduces the same dataset
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.transfers > 0 && args.accounts < 2 {
        return Err("Need at least 2 accounts to generate transfers".into());
    }

    let counts = Counts {
        accounts: args.accounts,
        transactions_per_account: args.transactions,
        transfers: args.transfers,
    };

    eprintln!("Generating dataset (seed {})...", args.seed);
    let dataset = demo::generate(args.seed, &counts);
    eprintln!(
        "Generated {} accounts, {} transactions, {} transfers",
        dataset.accounts.len(),
        dataset.transactions.len(),
        dataset.transfers.len()
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&dataset)?
    } else {
        serde_json::to_string(&dataset)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, json)?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run(Args::parse())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bank_core::Dataset;

    #[test]
    fn test_run_rejects_transfers_without_accounts() {
        let args = Args {
            accounts: 1,
            transactions: 0,
            transfers: 5,
            seed: 1,
            output: None,
            pretty: false,
        };
        assert!(run(args).is_err());
    }

    #[test]
    fn test_generated_json_loads_as_dataset() {
        let counts = Counts {
            accounts: 4,
            transactions_per_account: 10,
            transfers: 3,
        };
        let dataset = demo::generate(7, &counts);
        let json = serde_json::to_string(&dataset).unwrap();

        let restored: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.accounts.len(), 4);
        assert_eq!(restored.transactions.len(), 40);
        assert_eq!(restored.transfers.len(), 3);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let counts = Counts {
            accounts: 4,
            transactions_per_account: 5,
            transfers: 2,
        };
        assert_eq!(demo::generate(9, &counts), demo::generate(9, &counts));
    }
}
