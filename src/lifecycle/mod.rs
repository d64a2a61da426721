//! Runtime concerns for hosts embedding the store.

pub mod tracing;

pub use self::tracing::setup_tracing;
