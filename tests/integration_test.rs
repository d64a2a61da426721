use order_store::{LineItem, OrderError, OrderStatus, OrderStore, UserId};

/// Full end-to-end walk-through of the order lifecycle: two orders for one
/// user, a status progression, the cancellation guard, and the per-user
/// query.
#[test]
fn test_full_order_lifecycle() {
    let mut store = OrderStore::new();
    let user = UserId::from("u1");

    // Place order A.
    let a = store
        .create_order(
            vec![LineItem {
                price: 10.0,
                quantity: 2,
            }],
            user.clone(),
            serde_json::json!({ "street": "12 Main St" }),
        )
        .expect("Failed to create order A");
    assert_eq!(a.id.to_string(), "ORD-1");
    assert_eq!(a.total, 20.0);
    assert_eq!(a.status, OrderStatus::Pending);

    // Place order B.
    let b = store
        .create_order(
            vec![LineItem {
                price: 5.0,
                quantity: 1,
            }],
            user.clone(),
            serde_json::json!({ "street": "12 Main St" }),
        )
        .expect("Failed to create order B");
    assert_eq!(b.id.to_string(), "ORD-2");
    assert_eq!(b.total, 5.0);

    // B was created after A, so it lists first.
    let orders = store.orders_by_user(&user);
    let ids: Vec<_> = orders.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![b.id, a.id]);

    // Ship A, then try to cancel it: the guard refuses.
    let shipped = store
        .update_status(a.id, "shipped")
        .expect("Failed to update status")
        .expect("Order A not found");
    assert_eq!(shipped.status, OrderStatus::Shipped);

    let err = store.cancel_order(a.id).unwrap_err();
    assert!(matches!(err, OrderError::IllegalState { .. }));
    assert_eq!(
        store.get_order(a.id).expect("Order A not found").status,
        OrderStatus::Shipped,
        "refused cancellation must not change the status"
    );

    // B is still pending and cancels fine.
    assert!(store.cancel_order(b.id).expect("Failed to cancel order B"));
    assert_eq!(
        store.get_order(b.id).expect("Order B not found").status,
        OrderStatus::Cancelled
    );

    // Direct status updates stay unrestricted even from terminal-in-practice
    // statuses; only the cancel operation carries policy.
    let reopened = store
        .update_status(a.id, "delivered")
        .expect("Failed to update status")
        .expect("Order A not found")
        .status;
    assert_eq!(reopened, OrderStatus::Delivered);
    let reopened = store
        .update_status(a.id, "pending")
        .expect("Failed to update status")
        .expect("Order A not found")
        .status;
    assert_eq!(reopened, OrderStatus::Pending);

    // Identifiers referencing nothing are quiet non-events.
    assert!(!store
        .cancel_order(order_store::OrderId::from(99))
        .expect("missing order is not an error"));
    assert!(store
        .update_status(order_store::OrderId::from(99), "shipped")
        .expect("known status")
        .is_none());

    assert_eq!(store.len(), 2, "both orders remain on file");
}
