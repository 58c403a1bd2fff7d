//! Pure data structures implementing the [`StoreEntity`](crate::framework::StoreEntity) trait.

pub mod product;

pub use product::*;
