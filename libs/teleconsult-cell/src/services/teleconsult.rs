// libs/teleconsult-cell/src/services/teleconsult.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use appointment_cell::{can_join, JoinWindowPolicy};
use shared_config::AppConfig;
use shared_models::UserType;
use shared_utils::{all_present, simulate_latency};

use crate::models::{
    CreateTeleconsultRequest, JoinTeleconsultRequest, JoinedTeleconsult, TeleconsultAvailability,
    TeleconsultError, TeleconsultQuery, TeleconsultStatus, Teleconsultation,
    UpdateTeleconsultStatusRequest,
};
use crate::services::meeting::{join_url, MeetingCredentials};
use crate::services::store::{InMemoryTeleconsultStore, TeleconsultStore};

/// Teleconsultation scheduling and joining over a [`TeleconsultStore`].
pub struct TeleconsultService {
    store: Arc<dyn TeleconsultStore>,
    policy: JoinWindowPolicy,
    config: Arc<AppConfig>,
}

impl TeleconsultService {
    /// Service over a freshly seeded in-memory store.
    pub fn new(config: Arc<AppConfig>) -> Self {
        let policy = JoinWindowPolicy::from_config(&config);
        let store = Arc::new(InMemoryTeleconsultStore::seeded(&policy, Utc::now()));
        Self::with_store(config, store)
    }

    pub fn with_store(config: Arc<AppConfig>, store: Arc<dyn TeleconsultStore>) -> Self {
        Self {
            store,
            policy: JoinWindowPolicy::from_config(&config),
            config,
        }
    }

    pub fn store(&self) -> &Arc<dyn TeleconsultStore> {
        &self.store
    }

    /// Consultations where `userId` takes part in the `userType` role. Roles other than
    /// `patient` and `expert` match nothing.
    pub async fn list_for_user(
        &self,
        query: &TeleconsultQuery,
    ) -> Result<Vec<Teleconsultation>, TeleconsultError> {
        let [user_id, user_type] = all_present([&query.user_id, &query.user_type])
            .ok_or(TeleconsultError::MissingParameters)?;

        match UserType::parse(user_type) {
            Some(role) => Ok(self.store.find_by_participant(role, user_id).await),
            None => {
                warn!("Unknown userType '{}' in teleconsult listing", user_type);
                Ok(Vec::new())
            }
        }
    }

    pub async fn create(
        &self,
        request: CreateTeleconsultRequest,
    ) -> Result<Teleconsultation, TeleconsultError> {
        let [patient_id, expert_id, date, time] = all_present([
            &request.patient_id,
            &request.expert_id,
            &request.date,
            &request.time,
        ])
        .ok_or(TeleconsultError::MissingFields)?;

        let date = self.policy.parse_date(date)?;
        // Reject dates and times the join window could never be computed for
        self.policy.window_for(date, time)?;

        simulate_latency(&self.config, "schedule teleconsult").await;

        let credentials = MeetingCredentials::generate();
        let teleconsult = Teleconsultation {
            id: format!("tc-{}", Uuid::new_v4().simple()),
            patient_id: patient_id.to_string(),
            expert_id: expert_id.to_string(),
            date,
            time: time.to_string(),
            status: TeleconsultStatus::Scheduled,
            meeting_id: credentials.meeting_id,
            meeting_password: credentials.password,
        };

        self.store.insert(teleconsult.clone()).await;

        info!(
            "Scheduled teleconsult {} between patient {} and expert {}",
            teleconsult.id, teleconsult.patient_id, teleconsult.expert_id
        );

        Ok(teleconsult)
    }

    pub async fn update_status(
        &self,
        request: UpdateTeleconsultStatusRequest,
    ) -> Result<Teleconsultation, TeleconsultError> {
        let [id, status] = all_present([&request.id, &request.status])
            .ok_or(TeleconsultError::MissingFields)?;

        let status = TeleconsultStatus::parse(status)
            .ok_or_else(|| TeleconsultError::InvalidStatus(status.to_string()))?;

        let updated = self
            .store
            .set_status(id, status)
            .await
            .ok_or(TeleconsultError::NotFound)?;

        info!("Teleconsult {} status set to {}", updated.id, updated.status);
        Ok(updated)
    }

    /// Lets a participant into the meeting. The first join moves a `scheduled`
    /// consultation to `in-progress`; other statuses are left untouched.
    pub async fn join(
        &self,
        request: JoinTeleconsultRequest,
    ) -> Result<JoinedTeleconsult, TeleconsultError> {
        let [teleconsult_id, user_id, user_type] = all_present([
            &request.teleconsult_id,
            &request.user_id,
            &request.user_type,
        ])
        .ok_or(TeleconsultError::MissingFields)?;

        let teleconsult = self
            .store
            .get(teleconsult_id)
            .await
            .ok_or(TeleconsultError::NotFound)?;

        let authorized = match UserType::parse(user_type) {
            Some(UserType::Patient) => teleconsult.patient_id == user_id,
            Some(UserType::Expert) => teleconsult.expert_id == user_id,
            None => false,
        };

        if !authorized {
            warn!(
                "User {} ({}) is not a participant of teleconsult {}",
                user_id, user_type, teleconsult_id
            );
            return Err(TeleconsultError::NotParticipant);
        }

        simulate_latency(&self.config, "join teleconsult").await;

        let current = self
            .store
            .transition(
                teleconsult_id,
                TeleconsultStatus::Scheduled,
                TeleconsultStatus::InProgress,
            )
            .await
            .ok_or(TeleconsultError::NotFound)?;

        info!("User {} ({}) joined teleconsult {}", user_id, user_type, current.id);

        let join_url = join_url(
            &self.config.meeting_base_url,
            &current.meeting_id,
            &current.meeting_password,
        );

        Ok(JoinedTeleconsult {
            teleconsult: current,
            join_url,
        })
    }

    pub async fn availability(
        &self,
        id: &str,
        at: Option<DateTime<Utc>>,
    ) -> Result<TeleconsultAvailability, TeleconsultError> {
        let teleconsult = self.store.get(id).await.ok_or(TeleconsultError::NotFound)?;
        let now = at.unwrap_or_else(Utc::now);
        let window = self.policy.window_for(teleconsult.date, &teleconsult.time)?;

        Ok(TeleconsultAvailability {
            teleconsult_id: teleconsult.id,
            status: teleconsult.status,
            can_join: can_join(teleconsult.status, &window, now),
            opens_at: window.opens_at,
            closes_at: window.closes_at,
            evaluated_at: now,
        })
    }
}
