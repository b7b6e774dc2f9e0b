//! Request and response types for the acquiring bank boundary.

use serde::{Deserialize, Serialize};

use crate::validation::ValidPayment;

/// The authorization request sent to the acquiring bank.
///
/// A reshaped view of a validated payment: the expiry month and year
/// collapse into a single `MM/YYYY` string, which is the shape the bank's
/// API expects.
#[derive(Debug, Clone, Serialize)]
pub struct BankPaymentRequest {
    pub card_number: String,

    /// Expiry as `MM/YYYY`, month zero-padded
    pub expiry_date: String,

    pub currency: String,
    pub amount: i64,
    pub cvv: String,
}

impl From<&ValidPayment> for BankPaymentRequest {
    fn from(payment: &ValidPayment) -> Self {
        Self {
            card_number: payment.card_number.clone(),
            expiry_date: format!("{:02}/{}", payment.expiry_month, payment.expiry_year),
            currency: payment.currency.clone(),
            amount: payment.amount,
            cvv: payment.cvv.clone(),
        }
    }
}

/// The bank's decoded authorization decision.
#[derive(Debug, Clone, Deserialize)]
pub struct BankPaymentResponse {
    /// Whether the bank authorized the charge
    pub authorized: bool,
}
