use std::sync::Arc;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::{Provider, ProviderError, ProviderSearchQuery};
use crate::services::ProviderService;

impl From<ProviderError> for AppError {
    fn from(e: ProviderError) -> Self {
        match e {
            ProviderError::NotFound => AppError::NotFound(e.to_string()),
        }
    }
}

#[axum::debug_handler]
pub async fn list_providers(
    State(service): State<Arc<ProviderService>>,
    Query(query): Query<ProviderSearchQuery>,
) -> Json<Value> {
    let providers = service.search(&query);

    Json(json!({
        "providers": providers,
        "total": providers.len()
    }))
}

#[axum::debug_handler]
pub async fn get_provider(
    State(service): State<Arc<ProviderService>>,
    Path(provider_id): Path<String>,
) -> Result<Json<Provider>, AppError> {
    Ok(Json(service.get(&provider_id)?))
}

#[axum::debug_handler]
pub async fn list_specialties(State(service): State<Arc<ProviderService>>) -> Json<Value> {
    Json(json!({ "specialties": service.specialties() }))
}

#[axum::debug_handler]
pub async fn list_subspecialties(State(service): State<Arc<ProviderService>>) -> Json<Value> {
    Json(json!({ "subspecialties": service.subspecialties() }))
}

#[axum::debug_handler]
pub async fn list_languages(State(service): State<Arc<ProviderService>>) -> Json<Value> {
    Json(json!({ "languages": service.languages() }))
}
