//! Error types for the product service.

use crate::framework::StoreError;
use thiserror::Error;

/// Errors that can occur during product operations.
///
/// A missing product is not listed here: lookups return `Option` and callers
/// decide what absence means to them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductError {
    /// The backing store could not be reached.
    #[error("Product storage unavailable: {0}")]
    StorageUnavailable(#[from] StoreError),
}
