// libs/teleconsult-cell/src/models.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub use appointment_cell::AppointmentStatus as TeleconsultStatus;
use appointment_cell::JoinWindowError;

// ==============================================================================
// TELECONSULTATION DOMAIN MODELS
// ==============================================================================

/// A scheduled video consultation between a patient and an expert.
/// Participant references are opaque and never checked against a patient registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Teleconsultation {
    pub id: String,
    pub patient_id: String,
    pub expert_id: String,
    pub date: NaiveDate,
    pub time: String, // HH:MM, clinic-local
    pub status: TeleconsultStatus,
    pub meeting_id: String,
    pub meeting_password: String,
}

/// A teleconsultation as returned to a caller who has just joined it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinedTeleconsult {
    #[serde(flatten)]
    pub teleconsult: Teleconsultation,
    pub join_url: String,
}

// ==============================================================================
// REQUEST / RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeleconsultQuery {
    pub user_id: Option<String>,
    pub user_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeleconsultRequest {
    pub patient_id: Option<String>,
    pub expert_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeleconsultStatusRequest {
    pub id: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinTeleconsultRequest {
    pub teleconsult_id: Option<String>,
    pub user_id: Option<String>,
    pub user_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailabilityQuery {
    pub at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeleconsultAvailability {
    pub teleconsult_id: String,
    pub status: TeleconsultStatus,
    pub can_join: bool,
    pub opens_at: DateTime<Utc>,
    pub closes_at: DateTime<Utc>,
    pub evaluated_at: DateTime<Utc>,
}

// ==============================================================================
// ERROR MODELS
// ==============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TeleconsultError {
    #[error("Missing required parameters")]
    MissingParameters,

    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Teleconsult not found")]
    NotFound,

    #[error("Not authorized to join this teleconsult")]
    NotParticipant,

    #[error(transparent)]
    Schedule(#[from] JoinWindowError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joined_teleconsult_flattens_record_fields() {
        let joined = JoinedTeleconsult {
            teleconsult: Teleconsultation {
                id: "tc-001".to_string(),
                patient_id: "pat-001".to_string(),
                expert_id: "exp-001".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
                time: "14:00".to_string(),
                status: TeleconsultStatus::InProgress,
                meeting_id: "123456789".to_string(),
                meeting_password: "123456".to_string(),
            },
            join_url: "https://zoom.us/j/123456789?pwd=123456".to_string(),
        };

        let json = serde_json::to_value(&joined).unwrap();
        assert_eq!(json["id"], "tc-001");
        assert_eq!(json["patientId"], "pat-001");
        assert_eq!(json["status"], "in-progress");
        assert_eq!(json["joinUrl"], "https://zoom.us/j/123456789?pwd=123456");
    }
}
