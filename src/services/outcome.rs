//! Outcome resolution: the status-decision state machine.
//!
//! Maps how far the workflow got (validation failed, or a bank outcome) to
//! the attempt's terminal status and the HTTP response code. The status only
//! escalates as far as the workflow actually proceeded: `Declined` means the
//! bank was reached, `Rejected` means it never meaningfully was. That
//! distinction is the gateway's core contract.

use axum::http::StatusCode;

use super::bank_client::BankOutcome;
use crate::models::payment::PaymentStatus;

/// How far a submission got before the workflow stopped.
#[derive(Debug, Clone)]
pub enum AttemptOutcome {
    /// Validation failed; the bank was never called.
    Invalid,

    /// Validation passed and the bank call produced this outcome.
    Bank(BankOutcome),
}

/// Resolve the terminal status and response code for an attempt.
pub fn resolve(outcome: &AttemptOutcome) -> (PaymentStatus, StatusCode) {
    match outcome {
        AttemptOutcome::Invalid => (PaymentStatus::Rejected, StatusCode::BAD_REQUEST),
        AttemptOutcome::Bank(bank) => match bank {
            BankOutcome::Decision { authorized: true } => {
                (PaymentStatus::Authorized, StatusCode::OK)
            }
            BankOutcome::Decision { authorized: false } => (PaymentStatus::Declined, StatusCode::OK),
            BankOutcome::Rejected => (PaymentStatus::Declined, StatusCode::FORBIDDEN),
            BankOutcome::Unavailable => (PaymentStatus::Declined, StatusCode::BAD_GATEWAY),
            BankOutcome::Cancelled => (PaymentStatus::Rejected, client_closed_request()),
            BankOutcome::TransportFailure(_) => {
                (PaymentStatus::Rejected, StatusCode::INTERNAL_SERVER_ERROR)
            }
        },
    }
}

/// 499 Client Closed Request. Not a registered status code, so `http` has
/// no constant for it.
pub fn client_closed_request() -> StatusCode {
    StatusCode::from_u16(499).expect("499 is in the valid status code range")
}
