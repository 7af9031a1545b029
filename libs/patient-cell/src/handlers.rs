use std::sync::Arc;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use shared_utils::present;

use crate::models::{ClinicalBundle, PatientRosterQuery};
use crate::services::PatientService;

#[axum::debug_handler]
pub async fn get_patient(
    State(service): State<Arc<PatientService>>,
    Path(patient_id): Path<String>,
) -> Json<ClinicalBundle> {
    Json(service.clinical_bundle(&patient_id))
}

#[axum::debug_handler]
pub async fn list_patients(
    State(service): State<Arc<PatientService>>,
    Query(query): Query<PatientRosterQuery>,
) -> Json<Value> {
    let patients = service.roster(present(&query.expert_id));

    Json(json!({
        "patients": patients,
        "total": patients.len()
    }))
}
