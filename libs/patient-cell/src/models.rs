use serde::{Deserialize, Serialize};

// FHIR-flavoured shapes for the mock clinical bundle. Field names follow the FHIR
// JSON spelling so portal views can bind to them directly.

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalBundle {
    pub patient: PatientResource,
    pub conditions: Vec<BundleEntry<ConditionResource>>,
    pub medications: Vec<BundleEntry<MedicationResource>>,
    pub appointments: Vec<BundleEntry<AppointmentResource>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BundleEntry<T> {
    pub resource: T,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Text {
    pub text: String,
}

impl Text {
    pub fn new(text: &str) -> Self {
        Self { text: text.to_string() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientResource {
    pub id: String,
    pub name: Vec<Text>,
    pub birth_date: String,
    pub gender: String,
    pub address: Vec<Address>,
    pub telecom: Vec<Telecom>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub line: Vec<String>,
    pub city: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Telecom {
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coding {
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CodeableStatus {
    pub coding: Vec<Coding>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConditionResource {
    pub id: String,
    pub code: Text,
    pub clinical_status: CodeableStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicationResource {
    pub id: String,
    pub medication_codeable_concept: Text,
    pub dosage_instruction: Vec<Text>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResource {
    pub id: String,
    pub service_type: Vec<Text>,
    pub appointment_type: Text,
    pub start: String,
}

// ==============================================================================
// DEMO ROSTER
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub condition: String,
    pub expert_id: String,
    pub medications: Vec<MedicationSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicationSummary {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRosterQuery {
    pub expert_id: Option<String>,
}
