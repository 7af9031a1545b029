// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};

use crate::handlers;
use crate::services::AppointmentService;

pub fn appointment_routes(service: Arc<AppointmentService>) -> Router {
    Router::new()
        .route("/", get(handlers::list_appointments).post(handlers::schedule_appointment))
        .route("/{appointment_id}", get(handlers::get_appointment))
        .route("/{appointment_id}/join-window", get(handlers::get_join_window))
        .with_state(service)
}
