//! Error types and HTTP error response handling.
//!
//! Most of the gateway's failure modes are not errors in the type-system
//! sense: the payment workflow always produces a persisted attempt and a
//! response code, whatever went wrong (see `services::outcome`). This module
//! only covers the errors that short-circuit a handler outright.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::models::{packet::Packet, payment::PaymentAttempt};

/// Application-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No payment attempt is stored under the requested id.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Payment not found")]
    PaymentNotFound,
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// The body follows the same envelope convention as every other response:
/// `data` and `meta` are omitted when absent, so a lookup miss is a 404 with
/// an empty JSON object.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::PaymentNotFound => StatusCode::NOT_FOUND,
        };

        (status, Json(Packet::<PaymentAttempt>::empty())).into_response()
    }
}
