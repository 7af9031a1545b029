// libs/appointment-cell/src/services/appointment.rs
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_utils::{all_present, present, simulate_latency};

use crate::models::{
    Appointment, AppointmentError, AppointmentSearchQuery, AppointmentStatus, AppointmentType,
    JoinAvailability, ScheduleAppointmentRequest,
};
use crate::services::join_window::{can_join, JoinWindowPolicy};

/// In-memory appointment book shared by every request for the life of the process.
pub struct AppointmentService {
    appointments: Arc<RwLock<Vec<Appointment>>>,
    policy: JoinWindowPolicy,
    config: Arc<AppConfig>,
}

impl AppointmentService {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let policy = JoinWindowPolicy::from_config(&config);
        let seed = seed_appointments(&policy, Utc::now());
        Self::with_appointments(config, seed)
    }

    pub fn with_appointments(config: Arc<AppConfig>, appointments: Vec<Appointment>) -> Self {
        Self {
            appointments: Arc::new(RwLock::new(appointments)),
            policy: JoinWindowPolicy::from_config(&config),
            config,
        }
    }

    pub fn policy(&self) -> &JoinWindowPolicy {
        &self.policy
    }

    pub async fn list(&self, query: &AppointmentSearchQuery) -> Vec<Appointment> {
        let patient_id = present(&query.patient_id);
        let search = present(&query.search);

        let appointments = self.appointments.read().await;
        let mut results: Vec<Appointment> = appointments
            .iter()
            .filter(|a| patient_id.map_or(true, |id| a.patient_id == id))
            .filter(|a| search.map_or(true, |term| a.matches_search(term)))
            .cloned()
            .collect();

        results.sort_by(|a, b| (a.date, &a.time).cmp(&(b.date, &b.time)));
        results
    }

    pub async fn get(&self, id: &str) -> Result<Appointment, AppointmentError> {
        self.appointments
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(AppointmentError::NotFound)
    }

    pub async fn schedule(
        &self,
        request: ScheduleAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let [patient_id, expert_id, date, time] = all_present([
            &request.patient_id,
            &request.expert_id,
            &request.date,
            &request.time,
        ])
        .ok_or(AppointmentError::MissingFields)?;

        let date = self.policy.parse_date(date)?;
        // Reject dates and times the join window could never be computed for
        self.policy.window_for(date, time)?;

        let appointment_type = match present(&request.appointment_type) {
            Some(raw) => AppointmentType::parse(raw)
                .ok_or_else(|| AppointmentError::InvalidType(raw.to_string()))?,
            None => AppointmentType::Routine,
        };

        simulate_latency(&self.config, "schedule appointment").await;

        let appointment = Appointment {
            id: format!("appt-{}", Uuid::new_v4().simple()),
            patient_id: patient_id.to_string(),
            expert_id: expert_id.to_string(),
            expert_name: present(&request.expert_name).unwrap_or_default().to_string(),
            specialty: present(&request.specialty).unwrap_or_default().to_string(),
            date,
            time: time.to_string(),
            appointment_type,
            status: AppointmentStatus::Scheduled,
            location: present(&request.location).unwrap_or_default().to_string(),
            is_virtual: request.is_virtual.unwrap_or(false),
        };

        self.appointments.write().await.push(appointment.clone());

        info!(
            "Scheduled appointment {} for patient {} with expert {}",
            appointment.id, appointment.patient_id, appointment.expert_id
        );

        Ok(appointment)
    }

    pub async fn join_availability(
        &self,
        id: &str,
        at: Option<DateTime<Utc>>,
    ) -> Result<JoinAvailability, AppointmentError> {
        let appointment = self.get(id).await?;
        let now = at.unwrap_or_else(Utc::now);

        let window = self
            .policy
            .window_for(appointment.date, &appointment.time)
            .map_err(|e| {
                warn!("Appointment {} has an unusable date/time: {}", id, e);
                e
            })?;

        Ok(JoinAvailability {
            id: appointment.id,
            status: appointment.status,
            can_join: can_join(appointment.status, &window, now),
            starts_at: window.starts_at,
            opens_at: window.opens_at,
            closes_at: window.closes_at,
            evaluated_at: now,
        })
    }

    pub async fn count(&self) -> usize {
        self.appointments.read().await.len()
    }
}

/// Demo appointments for `pat-001`, placed a few days after `now` so they stay upcoming.
pub fn seed_appointments(policy: &JoinWindowPolicy, now: DateTime<Utc>) -> Vec<Appointment> {
    let today = policy.local_date(now);

    vec![
        Appointment {
            id: "appt-001".to_string(),
            patient_id: "pat-001".to_string(),
            expert_id: "exp-001".to_string(),
            expert_name: "Dr. Silva".to_string(),
            specialty: "Cardiology".to_string(),
            date: today + Duration::days(3),
            time: "14:30".to_string(),
            appointment_type: AppointmentType::CheckUp,
            status: AppointmentStatus::Scheduled,
            location: "Central Clinic".to_string(),
            is_virtual: false,
        },
        Appointment {
            id: "appt-002".to_string(),
            patient_id: "pat-001".to_string(),
            expert_id: "exp-004".to_string(),
            expert_name: "Dra. Santos".to_string(),
            specialty: "Endocrinology".to_string(),
            date: today + Duration::days(8),
            time: "10:00".to_string(),
            appointment_type: AppointmentType::FollowUp,
            status: AppointmentStatus::Scheduled,
            location: "Medical Center".to_string(),
            is_virtual: true,
        },
        Appointment {
            id: "appt-003".to_string(),
            patient_id: "pat-001".to_string(),
            expert_id: "exp-005".to_string(),
            expert_name: "Dr. Oliveira".to_string(),
            specialty: "Neurology".to_string(),
            date: today + Duration::days(10),
            time: "15:30".to_string(),
            appointment_type: AppointmentType::FirstVisit,
            status: AppointmentStatus::Scheduled,
            location: "São Lucas Hospital".to_string(),
            is_virtual: false,
        },
    ]
}
