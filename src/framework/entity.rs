//! # StoreEntity Trait
//!
//! The contract a record type must satisfy to be kept by a
//! [`StoreActor`](crate::framework::StoreActor) or any other
//! [`Repository`](crate::repository::Repository).
//!
//! # Architecture Note
//! The store never looks inside an entity. It only needs to know whether the entity
//! already carries an identifier and how to stamp one onto it. Everything else
//! (fields, getters, setters) belongs to the domain type.
//!
//! Identifiers are generated from a `u32` sequence, so `Id` must be convertible
//! from `u32`. A newtype such as `ProductId(u32)` is the usual choice.

use std::fmt::{Debug, Display};

/// Trait that any record must implement to be managed by the generic store.
pub trait StoreEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32> + 'static;

    /// Returns the identifier, or `None` if the entity has not been stored yet.
    fn id(&self) -> Option<Self::Id>;

    /// Returns the entity with `id` assigned.
    ///
    /// Called by the store when inserting a record without an identifier, and by
    /// `replace` to pin the record to the addressed slot.
    fn with_id(self, id: Self::Id) -> Self;
}
