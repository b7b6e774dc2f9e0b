//! Response envelope.
//!
//! Every response body wraps its payload under a `data` key and, when
//! validation failed, the field-level violations under a `meta` key. Absent
//! keys are omitted entirely rather than serialized as null.

use serde::{Deserialize, Serialize};

use crate::validation::ValidationErrors;

/// Envelope wrapping every API response body.
///
/// # JSON Examples
///
/// Successful submission:
///
/// ```json
/// {"data": {"id": "...", "status": "authorized", ...}}
/// ```
///
/// Rejected submission:
///
/// ```json
/// {"data": {...}, "meta": {"card_number": ["Only numbers allowed."]}}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Packet<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ValidationErrors>,
}

impl<T> Packet<T> {
    pub fn new(data: T, meta: Option<ValidationErrors>) -> Self {
        Self {
            data: Some(data),
            meta,
        }
    }

    pub fn data(data: T) -> Self {
        Self::new(data, None)
    }

    pub fn empty() -> Self {
        Self {
            data: None,
            meta: None,
        }
    }
}
