//! Data models and wire types.
//!
//! This module contains the request/response/record types that cross the
//! gateway's boundaries.

/// Acquiring bank request/response types
pub mod bank;
/// Response envelope (`data`/`meta`)
pub mod packet;
/// Payment request, attempt record, and status
pub mod payment;
