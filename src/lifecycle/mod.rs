//! # System Lifecycle
//!
//! Starting, wiring and stopping the pieces of the catalog.
//!
//! - [`CatalogSystem`] - spawns the product store and builds the service on it
//! - [`tracing::setup_tracing`] - installs the log subscriber

pub mod catalog_system;
pub mod tracing;

pub use catalog_system::{CatalogService, CatalogSystem};
