//! # Product Catalog
//!
//! A layered CRUD service over a single resource, the [`Product`](model::Product):
//!
//! ```text
//! HTTP (api) -> ProductService (service) -> Repository (repository) -> StoreActor (framework)
//! ```
//!
//! ## Architecture Notes
//!
//! ### 1. Absence Is Not an Error
//! Lookups return `Option`. Only the HTTP layer turns a missing product into a 404;
//! deleting a missing product succeeds with `deleted: false`.
//!
//! ### 2. Single Owner of the Records
//! The default store is one Tokio task owning a `BTreeMap`. Requests are processed
//! sequentially, so writes to the same id are serialized without locks and the last
//! write wins.
//!
//! ### 3. Substitution Through Traits
//! The service depends on [`Repository`](repository::Repository), the API on
//! [`ProductService`](service::ProductService). Swap the store task for the
//! [`SharedMapRepository`](repository::SharedMapRepository), or the service for a
//! test double, without touching callers.
//!
//! ### 4. Observability
//! `tracing` everywhere with structured fields. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`] - generic store task, client, and mocks
//! - [`repository`] - the storage abstraction and its implementations
//! - [`model`] - `Product` and `ProductId`
//! - [`service`] - operation contract and shared CRUD delegation
//! - [`api`] - axum router and handlers
//! - [`lifecycle`] - wiring, shutdown, tracing setup
//! - [`config`] - environment configuration
//!
//! ### Running the Server
//!
//! ```bash
//! RUST_LOG=info CATALOG_PORT=3000 cargo run
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod repository;
pub mod service;
