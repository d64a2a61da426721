//! # Order Store
//!
//! > **An in-process order-lifecycle tracker for an e-commerce backend.**
//!
//! This crate owns order records end to end: it creates orders from a product
//! list and a user identifier, moves them through a fixed status lifecycle,
//! computes monetary totals, and answers per-user order queries. It is the
//! whole system — there is no networking, persistence, or concurrency layer
//! here. Surrounding concerns (an HTTP surface, durable storage) are external
//! collaborators that call into this core through its method contracts.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### A passive, synchronous store
//! [`OrderStore`](store::OrderStore) is a plain owned value: construct it,
//! hold it, call it. Every operation is a direct call with an immediate
//! result — no queuing, no async boundary. Mutating operations take
//! `&mut self`, so exclusive access is enforced by the borrow checker in a
//! single-threaded host; a concurrent host wraps the store in a mutex.
//!
//! ### Errors vs. absences
//! Malformed *input* is an error ([`OrderError`](store::OrderError)):
//! an empty product list, a missing user id, a status string outside the
//! vocabulary, a cancellation after shipping. A reference to an order that
//! doesn't *exist* is not: updates return `Ok(None)` and cancellation
//! returns `Ok(false)`. The two failure families never mix.
//!
//! ### Snapshots, not live handles
//! Every order handed out is a clone of the stored record. Callers can't
//! corrupt store state by mutating what they were given; all changes go
//! through the store's methods.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`domain`])
//! Pure data structures with no behavior beyond conversions.
//! - **Key items**: [`Order`](domain::Order), [`LineItem`](domain::LineItem),
//!   [`OrderStatus`](domain::OrderStatus), [`OrderId`](domain::OrderId).
//!
//! ### 2. The Component ([`store`])
//! The single active component: record ownership, id minting, status
//! transitions, cancellation policy, queries.
//! - **Key items**: [`OrderStore`](store::OrderStore),
//!   [`OrderError`](store::OrderError).
//!
//! ### 3. The Runtime ([`lifecycle`])
//! Logging setup for binaries embedding the store.
//! - **Key items**: [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```
//! use order_store::{LineItem, OrderStatus, OrderStore, UserId};
//!
//! let mut store = OrderStore::new();
//!
//! let order = store
//!     .create_order(
//!         vec![LineItem { price: 10.0, quantity: 2 }],
//!         UserId::from("user_1"),
//!         serde_json::json!({ "city": "Springfield" }),
//!     )
//!     .expect("valid order");
//!
//! assert_eq!(order.total, 20.0);
//! assert_eq!(order.status, OrderStatus::Pending);
//! assert_eq!(order.id.to_string(), "ORD-1");
//!
//! // Move it along the lifecycle; an unknown id would yield Ok(None).
//! let shipped = store.update_status(order.id, "shipped").expect("known status");
//! assert_eq!(shipped.unwrap().status, OrderStatus::Shipped);
//!
//! // Once shipped, cancellation is refused.
//! assert!(store.cancel_order(order.id).is_err());
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod domain;
pub mod lifecycle;
pub mod store;

pub use domain::{InvalidStatus, LineItem, Order, OrderId, OrderStatus, UserId};
pub use store::{OrderError, OrderStore};
