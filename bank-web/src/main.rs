//! bank-web: Demo banking JSON API server.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use clap::Parser;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

mod api;
mod config;
mod error;
mod policy;
mod routes;
mod state;

use config::Config;
use state::AppState;

/// Demo banking JSON API server.
#[derive(Parser, Debug)]
#[command(name = "bank-web")]
#[command(about = "Demo banking JSON API server", long_about = None)]
struct Args {
    /// Address to bind the web server.
    #[arg(long, default_value = "127.0.0.1:8080")]
    address: String,

    /// Seed for the generated demo dataset.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Dataset JSON produced by bank-gen; generated when omitted.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Largest transfer the approval policy accepts, in dollars.
    #[arg(long, default_value_t = 10_000.0)]
    transfer_limit: f64,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Build the application router.
fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // API routes
        .route("/api/v1/accounts", get(routes::accounts::list_accounts))
        .route("/api/v1/accounts/{id}", get(routes::accounts::get_account))
        .route(
            "/api/v1/accounts/{id}/balance",
            get(routes::accounts::get_account_balance),
        )
        .route(
            "/api/v1/accounts/{id}/transactions",
            get(routes::accounts::get_account_transactions),
        )
        .route(
            "/api/v1/transfers",
            get(routes::transfers::list_transfers).post(routes::transfers::create_transfer),
        )
        .route(
            "/api/v1/transfers/{id}",
            get(routes::transfers::get_transfer),
        )
        .route("/api/v1/locations", get(routes::locations::search_locations))
        .route(
            "/api/v1/locations/{id}",
            get(routes::locations::get_location),
        )
        .route("/api/v1/calculators", post(routes::calculators::calculate))
        .route("/api/v1/verify", post(routes::verify::verify))
        .route("/api/v1/products", get(routes::products::list_products))
        .route(
            "/api/v1/products/{category}",
            get(routes::products::get_category),
        )
        .route("/health", get(routes::health))
        // Frontend fallback
        .fallback(routes::frontend::serve_frontend)
        // State
        .with_state(state)
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .init();

    let address: SocketAddr = args.address.parse()?;

    let config = Config {
        address,
        seed: args.seed,
        data: args.data,
        transfer_limit_cents: (args.transfer_limit * 100.0).round() as i64,
    };

    // Create application state
    let state = AppState::new(config)?;

    let app = router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("bank-web listening on http://{}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
