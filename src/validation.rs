//! Payment request validation.
//!
//! Pure rule checks over a `PaymentRequest`. Every rule is evaluated
//! independently (no short-circuiting) so the caller gets the complete set
//! of violations per field, keyed by the wire field name. The only
//! time-dependent rule, card expiry, takes the current instant as an
//! explicit parameter.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};

use crate::models::payment::PaymentRequest;

/// Field name mapped to the violation messages for that field.
pub type ValidationErrors = BTreeMap<String, Vec<String>>;

/// Currencies the gateway accepts.
pub const ACCEPTED_CURRENCIES: [&str; 3] = ["EUR", "GBP", "USD"];

const REQUIRED: &str = "This field is required.";
const NUMBERS_ONLY: &str = "Only numbers allowed.";
const EXPIRY_IN_PAST: &str =
    "The combination of the expiry month and expiry year values must be in the future.";

/// A payment request that passed every rule.
///
/// Produced only by [`validate`]; downstream code (the bank request builder)
/// works with concrete fields instead of re-checking options.
#[derive(Debug, Clone)]
pub struct ValidPayment {
    pub card_number: String,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub currency: String,
    pub amount: i64,
    pub cvv: String,
}

/// Check a payment request against all rules.
///
/// Returns the validated payment, or the non-empty map of violations when
/// any rule fails. `now` is the instant the expiry rule is evaluated
/// against.
pub fn validate(
    request: &PaymentRequest,
    now: DateTime<Utc>,
) -> Result<ValidPayment, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    match request.card_number.as_deref() {
        None | Some("") => push(&mut errors, "card_number", REQUIRED),
        Some(card_number) => {
            if !card_number.chars().all(|c| c.is_ascii_digit()) {
                push(&mut errors, "card_number", NUMBERS_ONLY);
            }
            if !(14..=19).contains(&card_number.chars().count()) {
                push(
                    &mut errors,
                    "card_number",
                    "Must be between 14 and 19 characters.",
                );
            }
        }
    }

    match request.expiry_month {
        None => push(&mut errors, "expiry_month", REQUIRED),
        Some(month) if !(1..=12).contains(&month) => {
            push(&mut errors, "expiry_month", "Must be between 1 and 12.");
        }
        Some(_) => {}
    }

    match request.expiry_year {
        None => push(&mut errors, "expiry_year", REQUIRED),
        Some(year) => {
            // Without a usable month, validate against the entire year
            let month = request
                .expiry_month
                .filter(|m| (1..=12).contains(m))
                .unwrap_or(12);
            if !expires_in_future(month, year, now) {
                push(&mut errors, "expiry_year", EXPIRY_IN_PAST);
            }
        }
    }

    match request.currency.as_deref() {
        None | Some("") => push(&mut errors, "currency", REQUIRED),
        Some(currency) => {
            if currency.chars().count() != 3 {
                push(&mut errors, "currency", "Must be exactly 3 characters.");
            }
            if !ACCEPTED_CURRENCIES.contains(&currency) {
                push(&mut errors, "currency", "Only EUR, GBP, or USD allowed.");
            }
        }
    }

    if request.amount.is_none() {
        push(&mut errors, "amount", REQUIRED);
    }

    match request.cvv.as_deref() {
        None | Some("") => push(&mut errors, "cvv", REQUIRED),
        Some(cvv) => {
            if !cvv.chars().all(|c| c.is_ascii_digit()) {
                push(&mut errors, "cvv", NUMBERS_ONLY);
            }
            if !(3..=4).contains(&cvv.chars().count()) {
                push(&mut errors, "cvv", "Must be between 3 and 4 characters.");
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidPayment {
        card_number: request.card_number.clone().unwrap_or_default(),
        expiry_month: request.expiry_month.unwrap_or_default(),
        expiry_year: request.expiry_year.unwrap_or_default(),
        currency: request.currency.clone().unwrap_or_default(),
        amount: request.amount.unwrap_or_default(),
        cvv: request.cvv.clone().unwrap_or_default(),
    })
}

/// Whether a card expiring in `month`/`year` is still usable at `now`.
///
/// A card remains usable through the last day of its expiry month, so the
/// check is: the first day of the following month must be strictly in the
/// future.
fn expires_in_future(month: i32, year: i32, now: DateTime<Utc>) -> bool {
    // December rolls over into the next year; a year too large to roll
    // over fails the check like any other year chrono cannot represent
    let (next_month, year) = if month == 12 {
        match year.checked_add(1) {
            Some(next_year) => (1, next_year),
            None => return false,
        }
    } else {
        (month + 1, year)
    };

    Utc.with_ymd_and_hms(year, next_month as u32, 1, 0, 0, 0)
        .single()
        .is_some_and(|first_day_expired| first_day_expired > now)
}

fn push(errors: &mut ValidationErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 15, 12, 0, 0).single().unwrap()
    }

    fn valid_request() -> PaymentRequest {
        PaymentRequest {
            card_number: Some("2222405343248877".to_string()),
            expiry_month: Some(4),
            expiry_year: Some(2030),
            currency: Some("GBP".to_string()),
            amount: Some(100),
            cvv: Some("123".to_string()),
        }
    }

    #[test]
    fn valid_request_passes() {
        let valid = validate(&valid_request(), fixed_now()).expect("request should be valid");
        assert_eq!(valid.card_number, "2222405343248877");
        assert_eq!(valid.amount, 100);
    }

    #[test]
    fn card_number_too_short_is_rejected() {
        let mut request = valid_request();
        request.card_number = Some("2222".to_string());

        let errors = validate(&request, fixed_now()).unwrap_err();
        assert_eq!(
            errors["card_number"],
            vec!["Must be between 14 and 19 characters."]
        );
    }

    #[test]
    fn card_number_too_long_is_rejected() {
        let mut request = valid_request();
        request.card_number = Some("222240534324811234567890".to_string());

        let errors = validate(&request, fixed_now()).unwrap_err();
        assert!(errors.contains_key("card_number"));
    }

    #[test]
    fn non_numeric_card_number_collects_both_violations() {
        let mut request = valid_request();
        request.card_number = Some("card".to_string());

        let errors = validate(&request, fixed_now()).unwrap_err();
        assert_eq!(
            errors["card_number"],
            vec![
                "Only numbers allowed.",
                "Must be between 14 and 19 characters."
            ]
        );
    }

    #[test]
    fn missing_fields_are_all_reported_as_required() {
        let request = PaymentRequest {
            card_number: None,
            expiry_month: None,
            expiry_year: None,
            currency: None,
            amount: None,
            cvv: None,
        };

        let errors = validate(&request, fixed_now()).unwrap_err();
        for field in [
            "card_number",
            "expiry_month",
            "expiry_year",
            "currency",
            "amount",
            "cvv",
        ] {
            assert_eq!(errors[field], vec![REQUIRED], "field {field}");
        }
    }

    #[test]
    fn expiry_month_out_of_range_is_rejected() {
        let mut request = valid_request();
        request.expiry_month = Some(13);

        let errors = validate(&request, fixed_now()).unwrap_err();
        assert_eq!(errors["expiry_month"], vec!["Must be between 1 and 12."]);
    }

    #[test]
    fn card_is_valid_through_the_end_of_its_expiry_month() {
        let mut request = valid_request();
        // now is 2026-08-15; a card expiring 8/2026 is usable until September 1st
        request.expiry_month = Some(8);
        request.expiry_year = Some(2026);
        assert!(validate(&request, fixed_now()).is_ok());

        request.expiry_month = Some(7);
        let errors = validate(&request, fixed_now()).unwrap_err();
        assert_eq!(errors["expiry_year"], vec![EXPIRY_IN_PAST]);
    }

    #[test]
    fn expiry_year_without_usable_month_covers_the_whole_year() {
        let mut request = valid_request();
        request.expiry_month = Some(0);
        request.expiry_year = Some(2026);

        // month violation is reported, but the year check treats the card
        // as expiring in December and still passes
        let errors = validate(&request, fixed_now()).unwrap_err();
        assert!(errors.contains_key("expiry_month"));
        assert!(!errors.contains_key("expiry_year"));

        request.expiry_year = Some(2025);
        let errors = validate(&request, fixed_now()).unwrap_err();
        assert_eq!(errors["expiry_year"], vec![EXPIRY_IN_PAST]);
    }

    #[test]
    fn december_expiry_rolls_into_the_next_year() {
        let mut request = valid_request();
        request.expiry_month = Some(12);
        request.expiry_year = Some(2026);
        assert!(validate(&request, fixed_now()).is_ok());
    }

    #[test]
    fn december_expiry_at_the_integer_limit_is_a_violation_not_a_panic() {
        let mut request = valid_request();
        request.expiry_month = Some(12);
        request.expiry_year = Some(i32::MAX);

        let errors = validate(&request, fixed_now()).unwrap_err();
        assert_eq!(errors["expiry_year"], vec![EXPIRY_IN_PAST]);
    }

    #[test]
    fn expiry_year_beyond_the_calendar_range_is_a_violation() {
        // chrono cannot represent years past 262143
        let mut request = valid_request();
        request.expiry_month = Some(6);
        request.expiry_year = Some(300_000);

        let errors = validate(&request, fixed_now()).unwrap_err();
        assert_eq!(errors["expiry_year"], vec![EXPIRY_IN_PAST]);
    }

    #[test]
    fn unknown_currency_is_rejected() {
        let mut request = valid_request();
        request.currency = Some("JPY".to_string());

        let errors = validate(&request, fixed_now()).unwrap_err();
        assert_eq!(errors["currency"], vec!["Only EUR, GBP, or USD allowed."]);
    }

    #[test]
    fn short_currency_collects_both_violations() {
        let mut request = valid_request();
        request.currency = Some("GB".to_string());

        let errors = validate(&request, fixed_now()).unwrap_err();
        assert_eq!(
            errors["currency"],
            vec![
                "Must be exactly 3 characters.",
                "Only EUR, GBP, or USD allowed."
            ]
        );
    }

    #[test]
    fn cvv_length_bounds() {
        let mut request = valid_request();
        request.cvv = Some("45".to_string());
        let errors = validate(&request, fixed_now()).unwrap_err();
        assert_eq!(errors["cvv"], vec!["Must be between 3 and 4 characters."]);

        request.cvv = Some("45667".to_string());
        let errors = validate(&request, fixed_now()).unwrap_err();
        assert_eq!(errors["cvv"], vec!["Must be between 3 and 4 characters."]);

        request.cvv = Some("4566".to_string());
        assert!(validate(&request, fixed_now()).is_ok());
    }

    #[test]
    fn violations_accumulate_across_fields() {
        let request = PaymentRequest {
            card_number: Some("card".to_string()),
            expiry_month: Some(1),
            expiry_year: Some(2023),
            currency: Some("currency".to_string()),
            amount: Some(60000),
            cvv: Some("cvv".to_string()),
        };

        let errors = validate(&request, fixed_now()).unwrap_err();
        assert!(errors.contains_key("card_number"));
        assert!(errors.contains_key("expiry_year"));
        assert!(errors.contains_key("currency"));
        assert!(errors.contains_key("cvv"));
        assert!(!errors.contains_key("amount"));
        assert!(!errors.contains_key("expiry_month"));
    }
}
