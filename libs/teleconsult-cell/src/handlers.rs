// libs/teleconsult-cell/src/handlers.rs
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
    AvailabilityQuery, CreateTeleconsultRequest, JoinTeleconsultRequest, TeleconsultError,
    TeleconsultQuery, UpdateTeleconsultStatusRequest,
};
use crate::services::{TeleconsultService, TeleconsultStore};

impl From<TeleconsultError> for AppError {
    fn from(e: TeleconsultError) -> Self {
        match e {
            TeleconsultError::MissingParameters
            | TeleconsultError::MissingFields
            | TeleconsultError::InvalidStatus(_) => AppError::BadRequest(e.to_string()),
            TeleconsultError::NotFound => AppError::NotFound(e.to_string()),
            TeleconsultError::NotParticipant => AppError::Forbidden(e.to_string()),
            TeleconsultError::Schedule(_) => AppError::ValidationError(e.to_string()),
        }
    }
}

/// Unreadable bodies are reported as a server-side failure of the attempted action.
fn body_or_internal<T>(
    payload: Result<Json<T>, JsonRejection>,
    action: &str,
) -> Result<T, AppError> {
    payload.map(|Json(body)| body).map_err(|e| {
        error!("Error trying to {}: {}", action, e);
        AppError::Internal(format!("Failed to {}", action))
    })
}

fn query_or_bad_request<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    query
        .map(|Query(q)| q)
        .map_err(|e| AppError::BadRequest(format!("Invalid query: {}", e.body_text())))
}

// ==============================================================================
// TELECONSULTATION HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn list_teleconsults(
    State(service): State<Arc<TeleconsultService>>,
    Query(query): Query<TeleconsultQuery>,
) -> Result<Json<Value>, AppError> {
    let teleconsults = service.list_for_user(&query).await?;

    Ok(Json(json!({ "teleconsults": teleconsults })))
}

#[axum::debug_handler]
pub async fn create_teleconsult(
    State(service): State<Arc<TeleconsultService>>,
    payload: Result<Json<CreateTeleconsultRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let request = body_or_internal(payload, "create teleconsult")?;
    let teleconsult = service.create(request).await?;

    Ok(Json(json!({
        "teleconsult": teleconsult,
        "message": "Teleconsultation scheduled successfully"
    })))
}

#[axum::debug_handler]
pub async fn update_teleconsult_status(
    State(service): State<Arc<TeleconsultService>>,
    payload: Result<Json<UpdateTeleconsultStatusRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let request = body_or_internal(payload, "update teleconsult")?;
    let teleconsult = service.update_status(request).await?;

    Ok(Json(json!({
        "teleconsult": teleconsult,
        "message": "Teleconsult status updated successfully"
    })))
}

#[axum::debug_handler]
pub async fn join_teleconsult(
    State(service): State<Arc<TeleconsultService>>,
    payload: Result<Json<JoinTeleconsultRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let request = body_or_internal(payload, "join teleconsult")?;
    let joined = service.join(request).await?;

    Ok(Json(json!({
        "teleconsult": joined,
        "message": "Joined teleconsult successfully"
    })))
}

#[axum::debug_handler]
pub async fn get_teleconsult_availability(
    State(service): State<Arc<TeleconsultService>>,
    Path(teleconsult_id): Path<String>,
    query: Result<Query<AvailabilityQuery>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let query = query_or_bad_request(query)?;
    let availability = service.availability(&teleconsult_id, query.at).await?;

    Ok(Json(json!(availability)))
}

pub async fn teleconsult_health_check(
    State(service): State<Arc<TeleconsultService>>,
) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "teleconsults": service.store().len().await
    }))
}
