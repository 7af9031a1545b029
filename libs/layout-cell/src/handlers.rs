// libs/layout-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::error;

use shared_models::error::AppError;

use crate::models::{ConsolidateHeadersRequest, ConsolidateHeadersResponse, SelectorError};
use crate::services::LayoutService;

impl From<SelectorError> for AppError {
    fn from(e: SelectorError) -> Self {
        AppError::BadRequest(format!("Invalid selector: {}", e))
    }
}

#[axum::debug_handler]
pub async fn consolidate_headers(
    State(service): State<Arc<LayoutService>>,
    payload: Result<Json<ConsolidateHeadersRequest>, JsonRejection>,
) -> Result<Json<ConsolidateHeadersResponse>, AppError> {
    let Json(request) = payload.map_err(|e| {
        error!("Error trying to consolidate headers: {}", e);
        AppError::Internal("Failed to consolidate headers".to_string())
    })?;

    let response = service.consolidate_headers(request)?;
    Ok(Json(response))
}
