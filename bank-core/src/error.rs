//! Error types for the core calculators.
//!
//! All error types implement `std::error::Error` for compatibility
//! with error handling frameworks like `anyhow` and `thiserror`.
//!
//! Every failure in this crate is input-shaped: either a numeric field
//! was not a finite number, or it fell outside the accepted range. Both
//! are terminal for the call; nothing here is retryable. Missing
//! entities (unknown location or account ids) are `Option` returns, not
//! errors, and become 404s at the transport layer.

use std::error::Error;
use std::fmt;

/// Result type for calculator operations.
pub type CalcResult<T> = std::result::Result<T, CalcError>;

/// Input validation error for the financial calculators.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CalcError {
    /// A numeric input was NaN or infinite.
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A numeric input was outside the accepted range.
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// What the field must satisfy.
        requirement: &'static str,
    },
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::NonFinite { field } => {
                write!(f, "{} must be a finite number", field)
            }
            CalcError::OutOfRange { field, requirement } => {
                write!(f, "{} {}", field, requirement)
            }
        }
    }
}

impl Error for CalcError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_display() {
        let err = CalcError::NonFinite { field: "home_price" };
        assert_eq!(format!("{}", err), "home_price must be a finite number");
    }

    #[test]
    fn test_out_of_range_display() {
        let err = CalcError::OutOfRange {
            field: "term_months",
            requirement: "must be at least 1",
        };
        assert_eq!(format!("{}", err), "term_months must be at least 1");
    }
}
