//! Generic keyed store for entities.
//!
//! This module provides the building blocks every repository in the crate sits on:
//! a record contract, a single-owner store task, and the client that talks to it.
//!
//! # Main Components
//!
//! - [`StoreEntity`] - Trait that record types implement to be stored
//! - [`StoreActor`] - Task that owns the records and serializes all writes
//! - [`StoreClient`] - Type-safe, cloneable handle for sending requests
//! - [`StoreError`] - The store is unreachable
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test callers without spawning a store.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use entity::StoreEntity;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
