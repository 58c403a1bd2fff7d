use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::{
    api::{
        error::{ApiError, Result},
        AppState,
    },
    model::{Product, ProductId, ProductPayload},
};

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub id: ProductId,
    pub deleted: bool,
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = state.products.create_product(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = state.products.list_products().await?;

    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Product>> {
    let id = ProductId(id);
    let product = state
        .products
        .get_product_by_id(id)
        .await?
        .ok_or(ApiError::NotFound(id))?;

    Ok(Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>> {
    let id = ProductId(id);
    let product = state
        .products
        .update_product(id, payload.into())
        .await?
        .ok_or(ApiError::NotFound(id))?;

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<DeleteResponse>> {
    let id = ProductId(id);
    let deleted = state.products.delete_product(id).await?;

    Ok(Json(DeleteResponse { id, deleted }))
}
