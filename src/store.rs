//! In-memory payment attempt store.
//!
//! Every submission is recorded here exactly once, keyed by its id. The
//! store is append-only: no update, no delete, no listing. Records are
//! immutable after insertion; `get` hands back a clone.

use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;
use uuid::Uuid;

use crate::models::payment::PaymentAttempt;

/// Concurrent keyed store for payment attempts.
///
/// Cloning is cheap (the map is behind an `Arc`), so each in-flight
/// submission can hold its own handle. Inserts are independent of each
/// other; a single read-write lock around the map is all the coordination
/// concurrent submissions need.
#[derive(Debug, Clone, Default)]
pub struct PaymentStore {
    payments: Arc<RwLock<HashMap<Uuid, PaymentAttempt>>>,
}

impl PaymentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a payment attempt under its id.
    pub fn add(&self, payment: PaymentAttempt) {
        self.payments.write().insert(payment.id, payment);
    }

    /// Fetch a previously recorded attempt, or `None` if the id is unknown.
    pub fn get(&self, id: Uuid) -> Option<PaymentAttempt> {
        self.payments.read().get(&id).cloned()
    }
}
