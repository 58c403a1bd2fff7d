//! # Product Service
//!
//! The operation contract the API boundary consumes, and its repository-backed
//! implementation.

use crate::model::{Product, ProductId};
use crate::repository::Repository;
use crate::service::base::BaseService;
use crate::service::error::ProductError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Business operations on products.
///
/// The API layer holds an `Arc<dyn ProductService>`, so any implementation
/// (including test doubles) can stand behind it.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Stores a new product (or overwrites the one at its client-supplied id).
    async fn create_product(&self, product: Product) -> Result<Product, ProductError>;

    /// Looks a product up. `Ok(None)` means no such product.
    async fn get_product_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductError>;

    /// Deletes a product. Returns `false` when there was nothing to delete.
    async fn delete_product(&self, id: ProductId) -> Result<bool, ProductError>;

    /// Every product, ordered by id.
    async fn list_products(&self) -> Result<Vec<Product>, ProductError>;

    /// Replaces name and price of an existing product. `id` wins over any id
    /// carried by `product`. `Ok(None)` means no such product.
    async fn update_product(
        &self,
        id: ProductId,
        product: Product,
    ) -> Result<Option<Product>, ProductError>;
}

/// [`ProductService`] delegating to any [`Repository<Product>`].
#[derive(Clone)]
pub struct ProductServiceImpl<R> {
    repository: R,
}

impl<R: Repository<Product>> ProductServiceImpl<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: Repository<Product>> BaseService<Product> for ProductServiceImpl<R> {
    type Error = ProductError;

    fn repository(&self) -> &dyn Repository<Product> {
        &self.repository
    }
}

#[async_trait]
impl<R: Repository<Product>> ProductService for ProductServiceImpl<R> {
    #[instrument(skip(self))]
    async fn create_product(&self, product: Product) -> Result<Product, ProductError> {
        debug!("create_product called");
        self.store(product).await
    }

    #[instrument(skip(self))]
    async fn get_product_by_id(&self, id: ProductId) -> Result<Option<Product>, ProductError> {
        self.find(id).await
    }

    #[instrument(skip(self))]
    async fn delete_product(&self, id: ProductId) -> Result<bool, ProductError> {
        self.remove(id).await
    }

    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        BaseService::find_all(self).await
    }

    #[instrument(skip(self))]
    async fn update_product(
        &self,
        id: ProductId,
        product: Product,
    ) -> Result<Option<Product>, ProductError> {
        self.replace(id, product).await
    }
}
