//! Payment Gateway - Card payment submission service.
//!
//! This is a REST API gateway that accepts card-payment requests, validates
//! them, forwards valid requests to a downstream acquiring bank, and records
//! every attempt (successful or not) for later retrieval by identifier.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Bank Boundary**: Outbound HTTP with reqwest (single attempt, no retries)
//! - **Storage**: In-memory concurrent store keyed by payment id
//! - **Format**: JSON requests/responses wrapped in a `data`/`meta` envelope
//!
//! # Workflow
//!
//! 1. Validate the payment request (all rules checked, violations collected)
//! 2. If valid, send the reshaped request to the acquiring bank
//! 3. Resolve the final status and response code from the bank's outcome
//! 4. Persist the attempt on every exit path, then return it to the caller

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod store;
pub mod validation;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{services::bank_client::BankClient, store::PaymentStore};

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Record of every payment attempt, keyed by id
    pub store: PaymentStore,

    /// Client for the downstream acquiring bank
    pub bank: BankClient,
}

/// Build the HTTP router.
///
/// Kept separate from `main` so integration tests can serve the exact same
/// route table against a mock bank.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/api/v1/payments", post(handlers::payments::post_payment))
        .route(
            "/api/v1/payments/{id}",
            get(handlers::payments::get_payment),
        )
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
