use std::collections::BTreeSet;

use tracing::debug;

use shared_utils::present;

use crate::models::{Provider, ProviderError, ProviderSearchQuery};

const ALL_SPECIALTIES: &str = "all";

/// Read-only provider directory over a seeded list.
pub struct ProviderService {
    providers: Vec<Provider>,
}

impl Default for ProviderService {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderService {
    pub fn new() -> Self {
        Self::with_providers(seed_providers())
    }

    pub fn with_providers(providers: Vec<Provider>) -> Self {
        Self { providers }
    }

    /// Directory order is preserved. Both filters must match when both are given.
    pub fn search(&self, query: &ProviderSearchQuery) -> Vec<Provider> {
        let search = present(&query.search);
        let specialty = present(&query.specialty)
            .filter(|s| !s.eq_ignore_ascii_case(ALL_SPECIALTIES));

        debug!("Searching providers: search={:?} specialty={:?}", search, specialty);

        self.providers
            .iter()
            .filter(|p| search.map_or(true, |term| p.matches_search(term)))
            .filter(|p| specialty.map_or(true, |s| p.has_specialty(s)))
            .cloned()
            .collect()
    }

    pub fn get(&self, provider_id: &str) -> Result<Provider, ProviderError> {
        self.providers
            .iter()
            .find(|p| p.id == provider_id)
            .cloned()
            .ok_or(ProviderError::NotFound)
    }

    /// Distinct specialties, sorted.
    pub fn specialties(&self) -> Vec<String> {
        distinct(self.providers.iter().map(|p| p.specialty.as_str()))
    }

    /// Distinct subspecialties across the directory, sorted.
    pub fn subspecialties(&self) -> Vec<String> {
        distinct(
            self.providers
                .iter()
                .flat_map(|p| p.subspecialties.iter().map(String::as_str)),
        )
    }

    /// Distinct spoken languages, sorted.
    pub fn languages(&self) -> Vec<String> {
        distinct(
            self.providers
                .iter()
                .flat_map(|p| p.languages.iter().map(String::as_str)),
        )
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn provider(
    id: &str,
    name: &str,
    specialty: &str,
    subspecialties: &[&str],
    languages: &[&str],
    education: &str,
    location: &str,
    availability: &[&str],
    in_person: bool,
) -> Provider {
    Provider {
        id: id.to_string(),
        name: name.to_string(),
        specialty: specialty.to_string(),
        subspecialties: strings(subspecialties),
        languages: strings(languages),
        education: education.to_string(),
        location: location.to_string(),
        availability: strings(availability),
        telemedicine: true,
        in_person,
    }
}

pub fn seed_providers() -> Vec<Provider> {
    vec![
        provider(
            "prov-001",
            "Dra. Ana Silva",
            "Cardiology",
            &["Heart Failure", "Preventive Cardiology"],
            &["Portuguese", "English", "Spanish"],
            "Harvard Medical School",
            "São Paulo, SP",
            &["Today 14:00", "Tomorrow 10:00", "Fri 16:00"],
            true,
        ),
        provider(
            "prov-002",
            "Dr. Carlos Santos",
            "Dermatology",
            &["Dermatologic Surgery"],
            &["Portuguese", "English"],
            "USP Medical School",
            "Rio de Janeiro, RJ",
            &["Today 15:30", "Thu 09:00", "Fri 14:00"],
            true,
        ),
        provider(
            "prov-003",
            "Dra. Mariana Oliveira",
            "Pediatrics",
            &["Neonatology", "Pediatric Allergy"],
            &["Portuguese", "French"],
            "UFRJ Medical School",
            "Curitiba, PR",
            &["Tomorrow 09:00", "Thu 15:00", "Fri 10:00"],
            false,
        ),
    ]
}
