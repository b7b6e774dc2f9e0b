//! Client for the acquiring bank's authorization endpoint.
//!
//! Sends one authorization request per call (no retries, no backoff) and
//! classifies whatever comes back into a [`BankOutcome`]. The caller's
//! cancellation token is observed around the whole exchange.

use tokio_util::sync::CancellationToken;
use url::Url;

use crate::models::bank::{BankPaymentRequest, BankPaymentResponse};

/// Everything a bank call can produce.
#[derive(Debug, Clone)]
pub enum BankOutcome {
    /// The bank answered with a success status and a decodable body.
    Decision { authorized: bool },

    /// The bank answered with a client-error status: it considers the
    /// request itself unacceptable.
    Rejected,

    /// The bank answered with a server-error status, or with a success
    /// status whose body could not be decoded.
    Unavailable,

    /// The caller's cancellation signal fired before the exchange finished.
    Cancelled,

    /// The exchange never produced a bank response (connection refused,
    /// DNS failure, timeout imposed by the caller's transport, ...).
    TransportFailure(String),
}

/// HTTP client for the acquiring bank.
///
/// The endpoint is fixed configuration supplied at startup, not request
/// data. Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct BankClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl BankClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Send one authorization request to the bank.
    ///
    /// # Classification
    ///
    /// - 2xx + decodable body → `Decision`
    /// - 2xx + undecodable body → `Unavailable`
    /// - 4xx → `Rejected`
    /// - anything else the bank answered with → `Unavailable`
    /// - no response at all → `TransportFailure`
    ///
    /// Cancellation wins the race at whatever point the token fires; the
    /// caller decides what that means for the payment record.
    pub async fn authorize(
        &self,
        request: &BankPaymentRequest,
        cancel: &CancellationToken,
    ) -> BankOutcome {
        let exchange = async {
            let response = match self
                .http
                .post(self.endpoint.clone())
                .json(request)
                .send()
                .await
            {
                Ok(response) => response,
                Err(e) => return BankOutcome::TransportFailure(e.to_string()),
            };

            let status = response.status();
            if status.is_success() {
                match response.json::<BankPaymentResponse>().await {
                    Ok(decision) => BankOutcome::Decision {
                        authorized: decision.authorized,
                    },
                    // a success status we cannot decode is not a decision we can trust
                    Err(_) => BankOutcome::Unavailable,
                }
            } else if status.is_client_error() {
                BankOutcome::Rejected
            } else {
                BankOutcome::Unavailable
            }
        };

        tokio::select! {
            _ = cancel.cancelled() => BankOutcome::Cancelled,
            outcome = exchange => outcome,
        }
    }
}
