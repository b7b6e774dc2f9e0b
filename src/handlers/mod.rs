//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params)
//! 2. Delegates to the payment services
//! 3. Returns the envelope-wrapped response with its status code

/// Liveness probe
pub mod health;
/// Payment submission and retrieval endpoints
pub mod payments;
