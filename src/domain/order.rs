//! The order entity and its identifier types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::domain::OrderStatus;

/// Type-safe identifier for Orders.
///
/// Wraps the store's mint counter value and renders as `ORD-<n>`, the only
/// identifier form callers ever see. Ids are minted sequentially and never
/// reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ORD-{}", self.0)
    }
}

/// Opaque identifier of the purchasing user, supplied by the caller.
///
/// Compared by exact equality; no normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry in an order's product list.
///
/// Line items are supplied wholesale at creation and are not validated
/// individually; catalog and pricing integrity belong to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub price: f64,
    pub quantity: u32,
}

/// A single customer purchase tracked through its status lifecycle.
///
/// Values handed out by the store are snapshots: mutating one does not touch
/// the stored record. All changes go through [`OrderStore`](crate::store::OrderStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub products: Vec<LineItem>,
    /// Opaque shipping payload, stored as-is and never interpreted.
    pub shipping_info: serde_json::Value,
    pub status: OrderStatus,
    /// Sum of `price * quantity` over `products`, fixed at creation.
    pub total: f64,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every status change.
    pub updated_at: DateTime<Utc>,
}
