use std::sync::Arc;
use axum::{routing::get, Router};

use crate::handlers::*;
use crate::services::ProviderService;

pub fn provider_routes(service: Arc<ProviderService>) -> Router {
    Router::new()
        .route("/", get(list_providers))
        .route("/specialties", get(list_specialties))
        .route("/subspecialties", get(list_subspecialties))
        .route("/languages", get(list_languages))
        .route("/{id}", get(get_provider))
        .with_state(service)
}
