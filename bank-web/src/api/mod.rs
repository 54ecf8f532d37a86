//! JSON API request and response types.

mod types;

pub use types::*;
