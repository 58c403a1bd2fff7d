use crate::framework::StoreEntity;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a product in the catalog.
///
/// # Store
/// This struct implements the [`StoreEntity`](crate::framework::StoreEntity) trait,
/// allowing it to be kept by a [`StoreActor`](crate::framework::StoreActor) or any
/// other [`Repository`](crate::repository::Repository).
///
/// The id is private and has no setter: it is either supplied when the product is
/// built or stamped on by the store on first save, and never changes after that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<ProductId>,
    name: String,
    price: f64,
}

impl Product {
    /// Creates a product that has not been stored yet.
    ///
    /// # Arguments
    /// * `name` - Product name
    /// * `price` - Product price
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            price,
        }
    }

    pub fn id(&self) -> Option<ProductId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }
}

impl StoreEntity for Product {
    type Id = ProductId;

    fn id(&self) -> Option<ProductId> {
        self.id
    }

    fn with_id(self, id: ProductId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

/// Request body for creating or replacing a product over the API.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPayload {
    #[serde(default)]
    pub id: Option<ProductId>,
    pub name: String,
    pub price: f64,
}

impl From<ProductPayload> for Product {
    fn from(payload: ProductPayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            price: payload.price,
        }
    }
}
