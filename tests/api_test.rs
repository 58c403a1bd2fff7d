use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use product_catalog::api::create_router;
use product_catalog::framework::StoreActor;
use product_catalog::model::Product;
use product_catalog::repository::SharedMapRepository;
use product_catalog::service::ProductServiceImpl;

fn app() -> Router {
    let service = ProductServiceImpl::new(SharedMapRepository::<Product>::new());
    create_router(Arc::new(service))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_create_get_delete_over_http() {
    let app = app();

    let (status, created) = send(
        &app,
        "POST",
        "/products",
        Some(json!({ "name": "Widget", "price": 9.99 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({ "id": 1, "name": "Widget", "price": 9.99 }));

    let (status, fetched) = send(&app, "GET", "/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, deleted) = send(&app, "DELETE", "/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({ "id": 1, "deleted": true }));

    let (status, body) = send(&app, "GET", "/products/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Product not found: 1" }));
}

#[tokio::test]
async fn test_delete_is_idempotent_over_http() {
    let app = app();

    let (status, body) = send(&app, "DELETE", "/products/999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 999, "deleted": false }));
}

#[tokio::test]
async fn test_update_and_list() {
    let app = app();
    send(
        &app,
        "POST",
        "/products",
        Some(json!({ "name": "Widget", "price": 9.99 })),
    )
    .await;

    let (status, updated) = send(
        &app,
        "PUT",
        "/products/1",
        Some(json!({ "name": "Widget Pro", "price": 19.99 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        json!({ "id": 1, "name": "Widget Pro", "price": 19.99 })
    );

    let (status, _) = send(
        &app,
        "PUT",
        "/products/8",
        Some(json!({ "name": "Ghost", "price": 1.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, listed) = send(&app, "GET", "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([updated]));
}

#[tokio::test]
async fn test_client_supplied_id_is_kept() {
    let app = app();

    let (status, created) = send(
        &app,
        "POST",
        "/products",
        Some(json!({ "id": 10, "name": "Pinned", "price": 2.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], json!(10));

    let (_, generated) = send(
        &app,
        "POST",
        "/products",
        Some(json!({ "name": "Next", "price": 3.0 })),
    )
    .await;
    assert_eq!(generated["id"], json!(1));
}

#[tokio::test]
async fn test_store_unavailable_maps_to_503() {
    let (actor, client) = StoreActor::<Product>::new(1);
    drop(actor);
    let app = create_router(Arc::new(ProductServiceImpl::new(client)));

    let (status, body) = send(&app, "GET", "/products/1", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body,
        json!({ "message": "Product storage unavailable: Store closed" })
    );
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(&app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}
