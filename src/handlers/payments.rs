//! Payment HTTP handlers.
//!
//! This module implements the payment API endpoints:
//! - POST /api/v1/payments - Submit a card payment
//! - GET /api/v1/payments/:id - Retrieve a payment attempt by id

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::{
    AppState,
    error::AppError,
    models::{
        packet::Packet,
        payment::{PaymentAttempt, PaymentRequest},
    },
    services::payment_service,
};

/// Submit a card payment.
///
/// # Request Body
///
/// ```json
/// {
///   "card_number": "2222405343248877",
///   "expiry_month": 4,
///   "expiry_year": 2030,
///   "currency": "GBP",
///   "amount": 100,
///   "cvv": "123"
/// }
/// ```
///
/// # Responses
///
/// The attempt record is always returned under `data`; the status code
/// tells the caller how far the workflow got:
///
/// - **200**: the bank decided (`status` is `authorized` or `declined`)
/// - **400**: validation failed; `meta` maps each failing field to its
///   violation messages
/// - **403**: the bank refused the card (do not retry)
/// - **502**: the bank was unavailable
/// - **499**: the request was cancelled by the caller
/// - **500**: the bank could not be reached at all
///
/// # Persistence
///
/// The workflow runs in its own task: if the client disconnects mid-flight,
/// the handler future is dropped and the drop guard cancels the token, but
/// the spawned task still resolves the outcome and persists the attempt.
/// Cancellation never skips persistence.
pub async fn post_payment(
    State(state): State<AppState>,
    Json(request): Json<PaymentRequest>,
) -> Response {
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    let workflow = tokio::spawn(payment_service::submit_payment(
        state.store,
        state.bank,
        request,
        cancel,
    ));

    match workflow.await {
        Ok((attempt, code, errors)) => (code, Json(Packet::new(attempt, errors))).into_response(),
        Err(e) => {
            // the workflow never panics in normal operation; if it somehow
            // does, answer like any other unexpected fault
            tracing::error!("payment workflow task failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Packet::<PaymentAttempt>::empty()),
            )
                .into_response()
        }
    }
}

/// Retrieve a payment attempt by id.
///
/// # Responses
///
/// - **200**: the stored attempt under `data`
/// - **404**: no attempt recorded under that id
pub async fn get_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<Uuid>,
) -> Result<Json<Packet<PaymentAttempt>>, AppError> {
    let attempt = state
        .store
        .get(payment_id)
        .ok_or(AppError::PaymentNotFound)?;

    Ok(Json(Packet::data(attempt)))
}
