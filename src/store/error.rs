//! Error types for the order store.

use thiserror::Error;

use crate::domain::{InvalidStatus, OrderId, OrderStatus};

/// Errors that can occur during order operations.
///
/// Only caller-input failures are errors. A lookup that misses is a normal
/// outcome: [`update_status`](crate::store::OrderStore::update_status)
/// returns `Ok(None)` and [`cancel_order`](crate::store::OrderStore::cancel_order)
/// returns `Ok(false)` for an unknown id.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The creation payload is malformed: no products, or no user id.
    #[error("Order validation error: {0}")]
    Validation(String),

    /// A status string outside the recognized vocabulary.
    #[error(transparent)]
    InvalidStatus(#[from] InvalidStatus),

    /// Cancellation attempted after the order left the warehouse.
    #[error("Cannot cancel order {id}: already {status}")]
    IllegalState { id: OrderId, status: OrderStatus },
}
