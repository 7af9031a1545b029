use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Directory card for a clinician patients can book with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub subspecialties: Vec<String>,
    pub languages: Vec<String>,
    pub education: String,
    pub location: String,
    /// Display labels for the next open slots, e.g. "Today 14:00".
    pub availability: Vec<String>,
    pub telemedicine: bool,
    pub in_person: bool,
}

impl Provider {
    /// Case-insensitive substring match on name or specialty.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.specialty.to_lowercase().contains(&term)
    }

    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.specialty.to_lowercase() == specialty.to_lowercase()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProviderSearchQuery {
    pub search: Option<String>,
    /// `all` or a blank value disables the filter.
    pub specialty: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ProviderError {
    #[error("Provider not found")]
    NotFound,
}
