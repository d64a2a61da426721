//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the
//! `tracing` crate for binaries embedding the store.
//!
//! The store itself only *emits* events; it never installs a subscriber, so
//! library consumers keep full control over their logging setup.
//!
//! ## What Gets Traced
//!
//! - **Creation**: `info!` with the new order id and store size
//! - **Status updates**: `info!` with the order id and new status
//! - **Lookup misses**: `warn!` with the missing order id
//! - **Rejections**: `warn!` with the validation or cancellation error
//!
//! These events are informational only and not part of the store's
//! correctness contract.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Very verbose tracing
//! RUST_LOG=trace cargo run
//!
//! # Filter to the store module only
//! RUST_LOG=order_store::store=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`** the demo binary prints a trace like:
//!
//! ```text
//! INFO Created id=ORD-1 size=1
//! INFO Created id=ORD-2 size=2
//! INFO order_processing: Updated order_id=ORD-1 status=shipped
//! WARN order_processing: Cancel rejected order_id=ORD-1 error=Cannot cancel order ORD-1: already shipped
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - the events carry the ids
        .compact()
        .init();
}
