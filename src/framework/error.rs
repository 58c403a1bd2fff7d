//! # Store Errors
//!
//! The only way the store itself fails is by being unreachable. Lookups that find
//! nothing are not errors; they come back as `None`.

/// Errors that can occur while talking to a store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store task is gone; the request could not be delivered.
    #[error("Store closed")]
    Closed,
    /// The store accepted the request but dropped the reply channel.
    #[error("Store dropped response channel")]
    Dropped,
}
