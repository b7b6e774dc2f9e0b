//! Payment Gateway - Main Application Entry Point
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Parse and validate the acquiring bank endpoint
//! 3. Construct the in-memory payment store and bank client
//! 4. Build HTTP router and start the server on the configured port

use anyhow::Context;
use payment_gateway::{
    AppState, config::Config, router, services::bank_client::BankClient, store::PaymentStore,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // The bank endpoint is fixed configuration; fail fast on a malformed URL
    let endpoint = config
        .bank_payments_endpoint
        .parse::<url::Url>()
        .context("BANK_PAYMENTS_ENDPOINT must be a valid URL")?;
    tracing::info!("Acquiring bank endpoint: {}", endpoint);

    let state = AppState {
        store: PaymentStore::new(),
        bank: BankClient::new(endpoint),
    };

    let app = router(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
