//! The order store: owner of all order records and the id-minting counter.

pub mod error;

pub use error::OrderError;

use chrono::Utc;
use std::collections::HashMap;
use tracing::{info, warn};

use crate::domain::{LineItem, Order, OrderId, OrderStatus, UserId};

/// In-memory owner of every order record.
///
/// The store mints identifiers from a counter that starts at 1, enforces the
/// cancellation policy, and serves per-user queries. It is a passive,
/// synchronous object: every operation is a direct call that runs to
/// completion, and mutating operations take `&mut self`, so a single-threaded
/// host needs no locking. A concurrent host must wrap the store in a mutex;
/// it carries no internal synchronization.
///
/// Orders handed out are snapshots. Mutating a returned [`Order`] does not
/// affect the stored record; all changes go through the store's methods.
/// Orders are never deleted: cancellation is a status, not removal.
pub struct OrderStore {
    orders: HashMap<OrderId, Order>,
    next_id: u64,
}

impl OrderStore {
    /// Creates an empty store with the id counter at 1.
    pub fn new() -> Self {
        Self {
            orders: HashMap::new(),
            next_id: 1,
        }
    }

    /// Creates a new order in `pending` status and returns a snapshot of it.
    ///
    /// The products are taken wholesale; item-level correctness is the
    /// caller's concern. `total` is computed once here and never recomputed.
    ///
    /// # Errors
    /// [`OrderError::Validation`] if `products` is empty or `user_id` is the
    /// empty string. Nothing is stored and the id counter does not advance:
    /// minting happens only after validation passes, so ids stay gapless
    /// across failed attempts.
    pub fn create_order(
        &mut self,
        products: Vec<LineItem>,
        user_id: UserId,
        shipping_info: serde_json::Value,
    ) -> Result<Order, OrderError> {
        if products.is_empty() {
            let err = OrderError::Validation("order must contain at least one product".to_string());
            warn!(error = %err, "Create rejected");
            return Err(err);
        }
        if user_id.as_str().is_empty() {
            let err = OrderError::Validation("user id is required".to_string());
            warn!(error = %err, "Create rejected");
            return Err(err);
        }

        let id = OrderId::from(self.next_id);
        self.next_id += 1;

        let total = Self::calculate_total(&products);
        let now = Utc::now();
        let order = Order {
            id,
            user_id,
            products,
            shipping_info,
            status: OrderStatus::Pending,
            total,
            created_at: now,
            updated_at: now,
        };

        self.orders.insert(id, order.clone());
        info!(%id, size = self.orders.len(), "Created");
        Ok(order)
    }

    /// Moves an order to a new status and returns a snapshot of it.
    ///
    /// The status string is checked against the recognized vocabulary
    /// *before* the lookup. Beyond that membership check any status may move
    /// to any other, including re-setting the current one; only
    /// [`cancel_order`](Self::cancel_order) layers policy on top.
    ///
    /// Returns `Ok(None)` when no order exists for `order_id` — a lookup
    /// miss is a normal outcome here, not an error.
    ///
    /// # Errors
    /// [`OrderError::InvalidStatus`] for a status outside the vocabulary;
    /// the target order, if any, is left untouched.
    pub fn update_status(
        &mut self,
        order_id: OrderId,
        status: &str,
    ) -> Result<Option<Order>, OrderError> {
        let status: OrderStatus = status.parse()?;
        Ok(self.apply_status(order_id, status))
    }

    /// Shared status-update path: lookup, mutate, refresh `updated_at`,
    /// notify. Returns the snapshot, or `None` on a miss.
    fn apply_status(&mut self, order_id: OrderId, status: OrderStatus) -> Option<Order> {
        match self.orders.get_mut(&order_id) {
            Some(order) => {
                order.status = status;
                order.updated_at = Utc::now();
                info!(%order_id, %status, "Updated");
                Some(order.clone())
            }
            None => {
                warn!(%order_id, "Not found");
                None
            }
        }
    }

    /// Cancels an order, returning `true` if it was moved to `cancelled`.
    ///
    /// Returns `Ok(false)` for an unknown id. Otherwise delegates to the
    /// status-update path, inheriting its `updated_at` refresh and update
    /// notification.
    ///
    /// # Errors
    /// [`OrderError::IllegalState`] if the order is already `shipped` or
    /// `delivered`; the order is left untouched.
    pub fn cancel_order(&mut self, order_id: OrderId) -> Result<bool, OrderError> {
        let Some(order) = self.orders.get(&order_id) else {
            return Ok(false);
        };

        if !order.status.can_cancel() {
            let err = OrderError::IllegalState {
                id: order_id,
                status: order.status,
            };
            warn!(%order_id, error = %err, "Cancel rejected");
            return Err(err);
        }

        Ok(self
            .apply_status(order_id, OrderStatus::Cancelled)
            .is_some())
    }

    /// Returns snapshots of every order placed by `user_id`, most recent
    /// first.
    ///
    /// Matching is exact equality on the id. Two orders created within one
    /// clock tick are ordered by mint sequence, later first. Unknown users
    /// get an empty vector.
    pub fn orders_by_user(&self, user_id: &UserId) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .orders
            .values()
            .filter(|order| &order.user_id == user_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.0.cmp(&a.id.0))
        });
        orders
    }

    /// Looks up a single order by id, returning a snapshot.
    pub fn get_order(&self, order_id: OrderId) -> Option<Order> {
        self.orders.get(&order_id).cloned()
    }

    /// Sum of `price * quantity` across `products`, starting from zero.
    ///
    /// Pure and unvalidated: no rounding, no rejection of odd values. The
    /// collaborator owning catalog integrity is assumed to supply well-formed
    /// items.
    pub fn calculate_total(products: &[LineItem]) -> f64 {
        products
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum()
    }

    /// Number of orders ever created in this store.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_price_times_quantity() {
        let products = vec![
            LineItem {
                price: 10.0,
                quantity: 2,
            },
            LineItem {
                price: 2.5,
                quantity: 4,
            },
        ];
        assert_eq!(OrderStore::calculate_total(&products), 30.0);
    }

    #[test]
    fn total_of_no_products_is_zero() {
        assert_eq!(OrderStore::calculate_total(&[]), 0.0);
    }

    #[test]
    fn zero_quantity_items_contribute_nothing() {
        let products = vec![LineItem {
            price: 99.0,
            quantity: 0,
        }];
        assert_eq!(OrderStore::calculate_total(&products), 0.0);
    }
}
