//! Payment data models and API request/response types.
//!
//! This module defines:
//! - `PaymentRequest`: Incoming submission body (transient, never persisted)
//! - `PaymentStatus`: Terminal outcome of an attempt
//! - `PaymentAttempt`: The record persisted and returned for every submission

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for submitting a payment.
///
/// Every field is optional at the deserialization layer so that missing
/// values surface as field-level "required" violations from the validator
/// instead of an opaque body-rejection. The full card number and CVV only
/// ever live in this transient struct; neither is persisted.
///
/// # JSON Example
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
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRequest {
    /// Full card number (digits only, 14-19 characters)
    #[serde(default)]
    pub card_number: Option<String>,

    /// Expiry month, 1 through 12
    #[serde(default)]
    pub expiry_month: Option<i32>,

    /// Expiry year; combined with the month it must not be in the past
    #[serde(default)]
    pub expiry_year: Option<i32>,

    /// ISO 4217 currency code (EUR, GBP, or USD)
    #[serde(default)]
    pub currency: Option<String>,

    /// Amount in the currency's minor unit (e.g. cents)
    #[serde(default)]
    pub amount: Option<i64>,

    /// Card verification value, 3 or 4 digits
    #[serde(default)]
    pub cvv: Option<String>,
}

/// Terminal status of a payment attempt.
///
/// The status escalates only as far as the workflow actually proceeded:
/// `Rejected` means the bank was never meaningfully consulted, `Declined`
/// means the bank was reached but did not (or could not be trusted to)
/// authorize, and `Authorized` means the bank approved the charge. It never
/// moves backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Rejected,
    Declined,
    Authorized,
}

/// The persisted record of one payment submission.
///
/// Exactly one of these is created and stored per submission, on every exit
/// path: success, validation failure, bank rejection, bank outage,
/// cancellation, or unexpected fault. It is immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentAttempt {
    /// Unique identifier, generated once per submission
    pub id: Uuid,

    /// Terminal outcome of the attempt
    pub status: PaymentStatus,

    /// Last four characters of the submitted card number
    ///
    /// The full number is never persisted.
    pub card_number_last_four: String,

    /// Expiry month as submitted
    pub expiry_month: i32,

    /// Expiry year as submitted
    pub expiry_year: i32,

    /// Currency code as submitted
    pub currency: String,

    /// Amount in minor units as submitted
    pub amount: i64,

    /// When the attempt's outcome was finalized
    pub timestamp: DateTime<Utc>,
}

/// Last four characters of a card number, or the whole string when shorter.
pub fn last_four(card_number: &str) -> String {
    let skip = card_number.chars().count().saturating_sub(4);
    card_number.chars().skip(skip).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_four_of_full_card_number() {
        assert_eq!(last_four("2222405343248877"), "8877");
    }

    #[test]
    fn last_four_of_short_input_is_the_whole_input() {
        assert_eq!(last_four("2222"), "2222");
        assert_eq!(last_four("22"), "22");
        assert_eq!(last_four(""), "");
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Authorized).unwrap(),
            "\"authorized\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Rejected).unwrap(),
            "\"rejected\""
        );
    }
}
