// libs/layout-cell/src/router.rs
use std::sync::Arc;

use axum::{routing::post, Router};

use crate::handlers::consolidate_headers;
use crate::services::LayoutService;

pub fn layout_routes(service: Arc<LayoutService>) -> Router {
    Router::new()
        .route("/consolidate-headers", post(consolidate_headers))
        .with_state(service)
}
