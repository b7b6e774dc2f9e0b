//! Payment submission orchestration.
//!
//! One call per submission: generate the id, validate, consult the bank if
//! validation passed, resolve the terminal status, then persist. The store
//! write happens on every exit path, failures and cancellations included;
//! the function is shaped so no branch can return before it.

use axum::http::StatusCode;
use chrono::Utc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::{
    models::{
        bank::BankPaymentRequest,
        payment::{PaymentAttempt, PaymentRequest, last_four},
    },
    services::{
        bank_client::{BankClient, BankOutcome},
        outcome::{self, AttemptOutcome},
    },
    store::PaymentStore,
    validation::{self, ValidationErrors},
};

/// Run one payment submission end to end.
///
/// # Process
///
/// 1. Generate the attempt id
/// 2. Validate the request; on failure the bank is never called
/// 3. Reshape the validated request and send it to the bank, watching the
///    cancellation token
/// 4. Resolve the terminal status and response code from the outcome
/// 5. Finalize the attempt record (timestamp set here, exactly once) and
///    persist it — this step runs whatever happened above
///
/// # Returns
///
/// The persisted attempt, the HTTP response code for it, and the field
/// violations when validation failed.
pub async fn submit_payment(
    store: PaymentStore,
    bank: BankClient,
    request: PaymentRequest,
    cancel: CancellationToken,
) -> (PaymentAttempt, StatusCode, Option<ValidationErrors>) {
    let id = Uuid::new_v4();

    let (outcome, errors) = match validation::validate(&request, Utc::now()) {
        Err(errors) => (AttemptOutcome::Invalid, Some(errors)),
        Ok(valid) => {
            let bank_request = BankPaymentRequest::from(&valid);
            let outcome = bank.authorize(&bank_request, &cancel).await;

            if let BankOutcome::TransportFailure(detail) = &outcome {
                // logged with the attempt id for operator diagnosis
                tracing::error!(payment_id = %id, "bank call failed: {detail}");
            }

            (AttemptOutcome::Bank(outcome), None)
        }
    };

    let (status, code) = outcome::resolve(&outcome);

    // even failures are stored for record purposes
    let attempt = PaymentAttempt {
        id,
        status,
        card_number_last_four: last_four(request.card_number.as_deref().unwrap_or_default()),
        expiry_month: request.expiry_month.unwrap_or_default(),
        expiry_year: request.expiry_year.unwrap_or_default(),
        currency: request.currency.clone().unwrap_or_default(),
        amount: request.amount.unwrap_or_default(),
        timestamp: Utc::now(),
    };
    store.add(attempt.clone());

    (attempt, code, errors)
}
