// libs/teleconsult-cell/src/services/store.rs
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use appointment_cell::JoinWindowPolicy;
use shared_models::UserType;

use crate::models::{TeleconsultStatus, Teleconsultation};

/// Storage seam for teleconsultations. The only implementation keeps records in
/// process memory; a database-backed one would slot in here.
#[async_trait]
pub trait TeleconsultStore: Send + Sync {
    async fn find_by_participant(&self, user_type: UserType, user_id: &str) -> Vec<Teleconsultation>;

    async fn get(&self, id: &str) -> Option<Teleconsultation>;

    async fn insert(&self, teleconsult: Teleconsultation);

    /// Sets the status unconditionally. `None` if no record has this id.
    async fn set_status(&self, id: &str, status: TeleconsultStatus) -> Option<Teleconsultation>;

    /// Moves `id` from `expected` to `next` only if it is currently `expected`.
    /// Returns the record as stored after the call, whether or not it changed.
    async fn transition(
        &self,
        id: &str,
        expected: TeleconsultStatus,
        next: TeleconsultStatus,
    ) -> Option<Teleconsultation>;

    async fn len(&self) -> usize;
}

#[derive(Default)]
pub struct InMemoryTeleconsultStore {
    records: RwLock<Vec<Teleconsultation>>,
}

impl InMemoryTeleconsultStore {
    pub fn new(records: Vec<Teleconsultation>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Store holding the two demo consultations, dated relative to `now`.
    pub fn seeded(policy: &JoinWindowPolicy, now: DateTime<Utc>) -> Self {
        Self::new(seed_teleconsults(policy, now))
    }
}

#[async_trait]
impl TeleconsultStore for InMemoryTeleconsultStore {
    async fn find_by_participant(&self, user_type: UserType, user_id: &str) -> Vec<Teleconsultation> {
        self.records
            .read()
            .await
            .iter()
            .filter(|t| match user_type {
                UserType::Patient => t.patient_id == user_id,
                UserType::Expert => t.expert_id == user_id,
            })
            .cloned()
            .collect()
    }

    async fn get(&self, id: &str) -> Option<Teleconsultation> {
        self.records.read().await.iter().find(|t| t.id == id).cloned()
    }

    async fn insert(&self, teleconsult: Teleconsultation) {
        self.records.write().await.push(teleconsult);
    }

    async fn set_status(&self, id: &str, status: TeleconsultStatus) -> Option<Teleconsultation> {
        let mut records = self.records.write().await;
        let record = records.iter_mut().find(|t| t.id == id)?;
        record.status = status;
        Some(record.clone())
    }

    async fn transition(
        &self,
        id: &str,
        expected: TeleconsultStatus,
        next: TeleconsultStatus,
    ) -> Option<Teleconsultation> {
        let mut records = self.records.write().await;
        let record = records.iter_mut().find(|t| t.id == id)?;
        if record.status == expected {
            record.status = next;
        }
        Some(record.clone())
    }

    async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

pub fn seed_teleconsults(policy: &JoinWindowPolicy, now: DateTime<Utc>) -> Vec<Teleconsultation> {
    let today = policy.local_date(now);

    vec![
        Teleconsultation {
            id: "tc-001".to_string(),
            patient_id: "pat-001".to_string(),
            expert_id: "exp-001".to_string(),
            date: today,
            time: "14:00".to_string(),
            status: TeleconsultStatus::Scheduled,
            meeting_id: "123456789".to_string(),
            meeting_password: "123456".to_string(),
        },
        Teleconsultation {
            id: "tc-002".to_string(),
            patient_id: "pat-002".to_string(),
            expert_id: "exp-001".to_string(),
            date: today + Duration::days(2),
            time: "10:30".to_string(),
            status: TeleconsultStatus::Scheduled,
            meeting_id: "987654321".to_string(),
            meeting_password: "654321".to_string(),
        },
    ]
}
