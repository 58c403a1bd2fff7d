use crate::model::ProductId;
use crate::service::ProductError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to HTTP callers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error(transparent)]
    Service(#[from] ProductError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Service(ProductError::StorageUnavailable(e)) => {
                tracing::error!(error = %e, "Storage unavailable");
                StatusCode::SERVICE_UNAVAILABLE
            }
        };

        let body = Json(json!({
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
