//! Demo binary walking an order through its full lifecycle.
//!
//! Run with `RUST_LOG=info cargo run` to watch the store's structured events:
//! creation, status updates, the refused cancellation, and the per-user
//! query.

use order_store::lifecycle::setup_tracing;
use order_store::{LineItem, OrderError, OrderStore, UserId};
use tracing::{error, info};

fn main() -> Result<(), OrderError> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting order store demo");

    let mut store = OrderStore::new();
    let user = UserId::from("user_1");

    let first = store.create_order(
        vec![
            LineItem {
                price: 25.5,
                quantity: 2,
            },
            LineItem {
                price: 4.0,
                quantity: 1,
            },
        ],
        user.clone(),
        serde_json::json!({ "street": "12 Main St", "city": "Springfield" }),
    )?;
    info!(id = %first.id, total = first.total, "First order placed");

    let second = store.create_order(
        vec![LineItem {
            price: 12.0,
            quantity: 1,
        }],
        user.clone(),
        serde_json::json!({ "street": "12 Main St", "city": "Springfield" }),
    )?;
    info!(id = %second.id, total = second.total, "Second order placed");

    {
        let _span = tracing::info_span!("order_processing").entered();

        store.update_status(first.id, "processing")?;
        store.update_status(first.id, "shipped")?;

        // A shipped order can no longer be cancelled.
        match store.cancel_order(first.id) {
            Ok(cancelled) => info!(id = %first.id, cancelled, "Cancel attempted"),
            Err(e) => error!(id = %first.id, error = %e, "Cancel refused"),
        }

        // The second order is still pending, so this one goes through.
        let cancelled = store.cancel_order(second.id)?;
        info!(id = %second.id, cancelled, "Cancel attempted");
    }

    for order in store.orders_by_user(&user) {
        info!(id = %order.id, status = %order.status, total = order.total, "On file");
    }

    info!(size = store.len(), "Demo completed");
    Ok(())
}
