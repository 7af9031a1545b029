// libs/appointment-cell/src/models.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::services::join_window::JoinWindowError;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub expert_id: String,
    pub expert_name: String,
    pub specialty: String,
    pub date: NaiveDate,
    pub time: String,
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
    pub location: String,
    pub is_virtual: bool,
}

impl Appointment {
    /// Case-insensitive substring match on the expert's name or specialty.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.expert_name.to_lowercase().contains(&term)
            || self.specialty.to_lowercase().contains(&term)
    }
}

/// Lifecycle shared by appointments and teleconsultations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "scheduled" => Some(AppointmentStatus::Scheduled),
            "in-progress" => Some(AppointmentStatus::InProgress),
            "completed" => Some(AppointmentStatus::Completed),
            "cancelled" => Some(AppointmentStatus::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::InProgress => "in-progress",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    /// Only scheduled and running consultations can be joined.
    pub fn is_joinable(&self) -> bool {
        matches!(self, AppointmentStatus::Scheduled | AppointmentStatus::InProgress)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentType {
    CheckUp,
    FollowUp,
    FirstVisit,
    Routine,
    Urgent,
}

impl AppointmentType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "check-up" => Some(AppointmentType::CheckUp),
            "follow-up" => Some(AppointmentType::FollowUp),
            "first-visit" => Some(AppointmentType::FirstVisit),
            "routine" => Some(AppointmentType::Routine),
            "urgent" => Some(AppointmentType::Urgent),
            _ => None,
        }
    }
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentType::CheckUp => write!(f, "check-up"),
            AppointmentType::FollowUp => write!(f, "follow-up"),
            AppointmentType::FirstVisit => write!(f, "first-visit"),
            AppointmentType::Routine => write!(f, "routine"),
            AppointmentType::Urgent => write!(f, "urgent"),
        }
    }
}

// ==============================================================================
// REQUEST / RESPONSE MODELS
// ==============================================================================

/// Every field is optional on the wire so missing values map to a 400 instead of a
/// deserialisation rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleAppointmentRequest {
    pub patient_id: Option<String>,
    pub expert_id: Option<String>,
    pub expert_name: Option<String>,
    pub specialty: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub appointment_type: Option<String>,
    pub location: Option<String>,
    pub is_virtual: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentSearchQuery {
    pub patient_id: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JoinWindowQuery {
    pub at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinAvailability {
    pub id: String,
    pub status: AppointmentStatus,
    pub can_join: bool,
    pub starts_at: DateTime<Utc>,
    pub opens_at: DateTime<Utc>,
    pub closes_at: DateTime<Utc>,
    pub evaluated_at: DateTime<Utc>,
}

// ==============================================================================
// ERROR MODELS
// ==============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid appointment type: {0}")]
    InvalidType(String),

    #[error(transparent)]
    JoinWindow(#[from] JoinWindowError),
}
