use crate::config::StoreConfig;
use crate::error::Result;
use crate::framework::{StoreActor, StoreClient};
use crate::model::Product;
use crate::service::ProductServiceImpl;
use std::sync::Arc;
use tracing::{error, info};

/// The service type the running system hands out.
pub type CatalogService = ProductServiceImpl<StoreClient<Product>>;

/// Runtime orchestrator for the product catalog.
///
/// `CatalogSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the product store task
/// - **Dependency Wiring**: building the service on top of the store client
///
/// # Example
///
/// ```ignore
/// let system = CatalogSystem::new(&StoreConfig::default());
///
/// let product = system.product_service.create_product(Product::new("Widget", 9.99)).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct CatalogSystem {
    /// Service backed by the running store task.
    pub product_service: Arc<CatalogService>,

    /// Task handle of the store (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl CatalogSystem {
    /// Spawns the product store and wires the service to it.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &StoreConfig) -> Self {
        let (actor, client) = StoreActor::<Product>::new(config.buffer_size);
        let handle = tokio::spawn(actor.run());

        Self {
            product_service: Arc::new(ProductServiceImpl::new(client)),
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the service drops the last store client, which closes the request
    /// channel; the store task drains and exits. Any other clone of
    /// `product_service` still alive keeps the store running, so callers must
    /// release theirs first.
    pub async fn shutdown(self) -> Result<()> {
        info!("Shutting down catalog...");

        drop(self.product_service);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(e.into());
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
