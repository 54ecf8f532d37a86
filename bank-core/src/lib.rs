//! Core domain logic for Demobank.
//!
//! This crate holds everything in the demo that computes rather than
//! serves: the point-of-service location directory with proximity
//! search, the financial calculators, account verification, and the
//! deterministic demo dataset shared by `bank-web` and `bank-gen`.
//!
//! Everything here is a pure function over immutable data. There is no
//! I/O, no async, and no shared mutable state: a catalog or dataset is
//! built once and only read afterwards, so any number of concurrent
//! callers can use the same instance without locking.
//!
//! # Quick Start
//!
//! ```
//! use bank_core::calc::{loan, LoanTerms};
//! use bank_core::locations::Catalog;
//!
//! // Proximity search over the builtin catalog
//! let catalog = Catalog::builtin();
//! let nearby = catalog.search_nearby(37.7749, -122.4194, 5.0, None);
//! assert!(!nearby.is_empty());
//!
//! // A 12-month zero-rate loan amortizes to principal / 12
//! let summary = loan::calculate(&LoanTerms {
//!     principal: 12_000.0,
//!     annual_rate_pct: 0.0,
//!     term_months: 12,
//! })
//! .unwrap();
//! assert_eq!(summary.monthly_payment, 1_000.0);
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

pub mod calc;
pub mod demo;
mod error;
pub mod locations;
pub mod types;
pub mod verify;

// Re-export main types
pub use error::{CalcError, CalcResult};
pub use types::{Account, AccountKind, Dataset, Transaction, Transfer, TransferStatus};

/// Generate a unique id.
///
/// Creates a globally unique identifier using timestamp and random data,
/// suitable for transfer receipt ids.
///
/// # Example
///
/// ```
/// let receipt_id = bank_core::id();
/// let another = bank_core::id();
/// assert_ne!(receipt_id, another);
/// ```
pub fn id() -> u128 {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos() as u64;

    let random: u64 = rand::random();

    ((timestamp as u128) << 64) | (random as u128)
}
