use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use appointment_cell::{appointment_routes, AppointmentService};
use layout_cell::{layout_routes, LayoutService};
use patient_cell::{patient_routes, PatientService};
use provider_cell::{provider_routes, ProviderService};
use shared_config::AppConfig;
use teleconsult_cell::{teleconsult_routes, TeleconsultService};

pub fn create_router(config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "SequoiaCare API is running!" }))
        .nest("/api/teleconsult", teleconsult_routes(Arc::new(TeleconsultService::new(config.clone()))))
        .nest("/api/patient", patient_routes(Arc::new(PatientService::new())))
        .nest("/api/providers", provider_routes(Arc::new(ProviderService::new())))
        .nest("/api/appointments", appointment_routes(Arc::new(AppointmentService::new(config.clone()))))
        .nest("/api/layout", layout_routes(Arc::new(LayoutService::new(config))))
}
