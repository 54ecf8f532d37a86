//! Configuration for bank-web.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Address to bind the web server.
    pub address: SocketAddr,
    /// Seed for the generated demo dataset.
    pub seed: u64,
    /// Dataset JSON to load instead of generating (from bank-gen).
    pub data: Option<PathBuf>,
    /// Largest transfer the approval policy will accept, in cents.
    pub transfer_limit_cents: i64,
}
