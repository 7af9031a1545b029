// libs/teleconsult-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::*;
use crate::services::TeleconsultService;

/// Creates the teleconsultation routes. Meant to be nested under `/api/teleconsult`.
pub fn teleconsult_routes(service: Arc<TeleconsultService>) -> Router {
    Router::new()
        .route(
            "/",
            get(list_teleconsults)
                .post(create_teleconsult)
                .patch(update_teleconsult_status),
        )
        .route("/join", post(join_teleconsult))
        .route("/health", get(teleconsult_health_check))
        .route("/{teleconsult_id}/availability", get(get_teleconsult_availability))
        .with_state(service)
}
