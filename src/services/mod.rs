//! Business logic services.
//!
//! Services contain the core workflow separated from HTTP handlers:
//! the acquiring bank client, the outcome resolver, and the payment
//! submission orchestration.

pub mod bank_client;
pub mod outcome;
pub mod payment_service;
