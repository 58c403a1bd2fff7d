//! # HTTP API
//!
//! Translates JSON requests into [`ProductService`] calls. Handlers hold no state of
//! their own; everything goes through the service in [`AppState`].
//!
//! | Method | Path             | Absence             |
//! |--------|------------------|---------------------|
//! | POST   | `/products`      | -                   |
//! | GET    | `/products`      | -                   |
//! | GET    | `/products/{id}` | 404                 |
//! | PUT    | `/products/{id}` | 404                 |
//! | DELETE | `/products/{id}` | 200, `deleted: false` |

pub mod error;
pub mod products;

use crate::service::ProductService;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductService>,
}

pub fn create_router(products: Arc<dyn ProductService>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { products })
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
