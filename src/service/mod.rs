//! Product business operations.
//!
//! - [`base`] - [`BaseService`] shared CRUD delegation over a repository
//! - [`product_service`] - [`ProductService`] contract and [`ProductServiceImpl`]
//! - [`error`] - [`ProductError`] type for type-safe error handling

pub mod base;
pub mod error;
pub mod product_service;

pub use base::BaseService;
pub use error::ProductError;
pub use product_service::{ProductService, ProductServiceImpl};
