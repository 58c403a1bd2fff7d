use product_catalog::config::StoreConfig;
use product_catalog::framework::StoreEntity;
use product_catalog::lifecycle::CatalogSystem;
use product_catalog::model::{Product, ProductId};
use product_catalog::repository::SharedMapRepository;
use product_catalog::service::{ProductError, ProductService, ProductServiceImpl};

/// Full lifecycle of one product through the real store task.
#[tokio::test]
async fn test_create_get_delete_scenario() {
    let system = CatalogSystem::new(&StoreConfig::default());
    let service = system.product_service.clone();

    let created = service
        .create_product(Product::new("Widget", 9.99))
        .await
        .expect("Failed to create product");
    assert_eq!(created, Product::new("Widget", 9.99).with_id(ProductId(1)));

    let fetched = service
        .get_product_by_id(ProductId(1))
        .await
        .expect("Failed to get product");
    assert_eq!(fetched, Some(created));

    service
        .delete_product(ProductId(1))
        .await
        .expect("Failed to delete product");

    let after_delete = service
        .get_product_by_id(ProductId(1))
        .await
        .expect("Failed to get product");
    assert!(after_delete.is_none());

    drop(service);
    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_get_on_empty_store_is_absent() {
    let system = CatalogSystem::new(&StoreConfig::default());

    let result = system.product_service.get_product_by_id(ProductId(999)).await;
    assert_eq!(result, Ok(None));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_missing_id_leaves_store_unchanged() {
    let system = CatalogSystem::new(&StoreConfig::default());
    let service = system.product_service.clone();

    let kept = service
        .create_product(Product::new("Keeper", 1.0))
        .await
        .unwrap();

    assert_eq!(service.delete_product(ProductId(42)).await, Ok(false));
    assert_eq!(service.list_products().await, Ok(vec![kept]));

    drop(service);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_save_on_existing_id_overwrites_whole_record() {
    let system = CatalogSystem::new(&StoreConfig::default());
    let service = system.product_service.clone();

    let original = service
        .create_product(Product::new("Widget", 9.99))
        .await
        .unwrap();
    let id = original.id().unwrap();

    let replacement = Product::new("Sprocket", 0.5).with_id(id);
    service.create_product(replacement.clone()).await.unwrap();

    assert_eq!(service.get_product_by_id(id).await, Ok(Some(replacement)));
    assert_eq!(service.list_products().await.unwrap().len(), 1);

    drop(service);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_missing_product_does_not_create_it() {
    let system = CatalogSystem::new(&StoreConfig::default());
    let service = system.product_service.clone();

    let result = service
        .update_product(ProductId(5), Product::new("Ghost", 1.0))
        .await;
    assert_eq!(result, Ok(None));
    assert_eq!(service.get_product_by_id(ProductId(5)).await, Ok(None));

    drop(service);
    system.shutdown().await.unwrap();
}

/// Concurrent creates must each get a distinct id.
#[tokio::test]
async fn test_concurrent_creates_get_unique_ids() {
    let system = CatalogSystem::new(&StoreConfig { buffer_size: 4 });

    let mut handles = vec![];
    for i in 0..20 {
        let service = system.product_service.clone();
        handles.push(tokio::spawn(async move {
            service
                .create_product(Product::new(format!("Item {i}"), i as f64))
                .await
        }));
    }

    let mut ids = vec![];
    for handle in handles {
        let product = handle.await.unwrap().unwrap();
        ids.push(product.id().unwrap());
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);

    let listed = system.product_service.list_products().await.unwrap();
    assert_eq!(listed.len(), 20);

    system.shutdown().await.unwrap();
}

/// The same service logic runs unchanged over a different repository.
#[tokio::test]
async fn test_service_over_shared_map_repository() {
    let service = ProductServiceImpl::new(SharedMapRepository::<Product>::new());

    let created = service
        .create_product(Product::new("Widget", 9.99))
        .await
        .unwrap();
    assert_eq!(created.id(), Some(ProductId(1)));
    assert_eq!(service.get_product_by_id(ProductId(1)).await, Ok(Some(created)));
    assert_eq!(service.delete_product(ProductId(1)).await, Ok(true));
    assert_eq!(service.get_product_by_id(ProductId(1)).await, Ok(None));
}

#[tokio::test]
async fn test_store_gone_is_storage_unavailable() {
    use product_catalog::framework::{StoreActor, StoreError};

    let (actor, client) = StoreActor::<Product>::new(1);
    drop(actor);
    let service = ProductServiceImpl::new(client);

    let result = service.list_products().await;
    assert_eq!(
        result,
        Err(ProductError::StorageUnavailable(StoreError::Closed))
    );
}
