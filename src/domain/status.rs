//! The controlled status vocabulary for the order lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle stage of an order.
///
/// The wire form is the lowercase name (`pending`, `processing`, `shipped`,
/// `delivered`, `cancelled`); [`Display`](fmt::Display) and [`FromStr`] use
/// it, as does serde.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Initial status of every new order.
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Whether an order in this status may still be cancelled.
    ///
    /// Cancellation is forbidden once the order has left the warehouse.
    pub fn can_cancel(&self) -> bool {
        !matches!(self, OrderStatus::Shipped | OrderStatus::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status string outside the five-value vocabulary, carrying the rejected
/// value.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Invalid status: {0}")]
pub struct InvalidStatus(pub String);

impl FromStr for OrderStatus {
    type Err = InvalidStatus;

    /// Parses the exact lowercase wire form; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(InvalidStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_five_statuses() {
        assert_eq!("pending".parse(), Ok(OrderStatus::Pending));
        assert_eq!("processing".parse(), Ok(OrderStatus::Processing));
        assert_eq!("shipped".parse(), Ok(OrderStatus::Shipped));
        assert_eq!("delivered".parse(), Ok(OrderStatus::Delivered));
        assert_eq!("cancelled".parse(), Ok(OrderStatus::Cancelled));
    }

    #[test]
    fn rejects_unknown_values_naming_them() {
        let err = "refunded".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err, InvalidStatus("refunded".to_string()));
        assert_eq!(err.to_string(), "Invalid status: refunded");
        // The match is exact, no case folding.
        assert!("Pending".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn cancel_policy_follows_warehouse_handoff() {
        assert!(OrderStatus::Pending.can_cancel());
        assert!(OrderStatus::Processing.can_cancel());
        assert!(OrderStatus::Cancelled.can_cancel());
        assert!(!OrderStatus::Shipped.can_cancel());
        assert!(!OrderStatus::Delivered.can_cancel());
    }
}
