// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde_json::{json, Value};
use tracing::error;

use shared_models::error::AppError;

use crate::models::{
    AppointmentError, AppointmentSearchQuery, JoinWindowQuery, ScheduleAppointmentRequest,
};
use crate::services::AppointmentService;

impl From<AppointmentError> for AppError {
    fn from(e: AppointmentError) -> Self {
        match e {
            AppointmentError::NotFound => AppError::NotFound("Appointment not found".to_string()),
            AppointmentError::MissingFields => {
                AppError::BadRequest("Missing required fields".to_string())
            }
            AppointmentError::InvalidType(_) | AppointmentError::JoinWindow(_) => {
                AppError::ValidationError(e.to_string())
            }
        }
    }
}

fn query_or_bad_request<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    query
        .map(|Query(q)| q)
        .map_err(|e| AppError::BadRequest(format!("Invalid query: {}", e.body_text())))
}

// ==============================================================================
// APPOINTMENT HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn list_appointments(
    State(service): State<Arc<AppointmentService>>,
    Query(query): Query<AppointmentSearchQuery>,
) -> Result<Json<Value>, AppError> {
    let appointments = service.list(&query).await;

    Ok(Json(json!({
        "appointments": appointments,
        "total": appointments.len()
    })))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(service): State<Arc<AppointmentService>>,
    Path(appointment_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let appointment = service.get(&appointment_id).await?;

    Ok(Json(json!({ "appointment": appointment })))
}

#[axum::debug_handler]
pub async fn schedule_appointment(
    State(service): State<Arc<AppointmentService>>,
    payload: Result<Json<ScheduleAppointmentRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload.map_err(|e| {
        error!("Error scheduling appointment: {}", e);
        AppError::Internal("Failed to schedule appointment".to_string())
    })?;

    let appointment = service.schedule(request).await?;

    Ok(Json(json!({
        "appointment": appointment,
        "message": "Appointment scheduled successfully"
    })))
}

#[axum::debug_handler]
pub async fn get_join_window(
    State(service): State<Arc<AppointmentService>>,
    Path(appointment_id): Path<String>,
    query: Result<Query<JoinWindowQuery>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let query = query_or_bad_request(query)?;
    let availability = service.join_availability(&appointment_id, query.at).await?;

    Ok(Json(json!(availability)))
}
