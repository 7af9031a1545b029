use tracing::debug;

use crate::models::{
    Address, AppointmentResource, BundleEntry, ClinicalBundle, CodeableStatus, Coding,
    ConditionResource, MedicationResource, MedicationSummary, PatientResource, PatientSummary,
    Telecom, Text,
};

/// Serves canned clinical data. There is no patient registry behind it.
pub struct PatientService {
    bundle: ClinicalBundle,
    roster: Vec<PatientSummary>,
}

impl Default for PatientService {
    fn default() -> Self {
        Self::new()
    }
}

impl PatientService {
    pub fn new() -> Self {
        Self {
            bundle: mock_clinical_bundle(),
            roster: demo_roster(),
        }
    }

    /// The same bundle is returned whatever `patient_id` is asked for.
    pub fn clinical_bundle(&self, patient_id: &str) -> ClinicalBundle {
        debug!("Serving mock clinical bundle for requested patient {}", patient_id);
        self.bundle.clone()
    }

    pub fn roster(&self, expert_id: Option<&str>) -> Vec<PatientSummary> {
        self.roster
            .iter()
            .filter(|p| expert_id.map_or(true, |id| p.expert_id == id))
            .cloned()
            .collect()
    }
}

fn condition(id: &str, text: &str) -> BundleEntry<ConditionResource> {
    BundleEntry {
        resource: ConditionResource {
            id: id.to_string(),
            code: Text::new(text),
            clinical_status: CodeableStatus {
                coding: vec![Coding { code: "active".to_string() }],
            },
        },
    }
}

fn medication(id: &str, name: &str, dosage: &str) -> BundleEntry<MedicationResource> {
    BundleEntry {
        resource: MedicationResource {
            id: id.to_string(),
            medication_codeable_concept: Text::new(name),
            dosage_instruction: vec![Text::new(dosage)],
            status: "active".to_string(),
        },
    }
}

fn appointment(id: &str, service: &str, kind: &str, start: &str) -> BundleEntry<AppointmentResource> {
    BundleEntry {
        resource: AppointmentResource {
            id: id.to_string(),
            service_type: vec![Text::new(service)],
            appointment_type: Text::new(kind),
            start: start.to_string(),
        },
    }
}

pub fn mock_clinical_bundle() -> ClinicalBundle {
    ClinicalBundle {
        patient: PatientResource {
            id: "example-patient-id".to_string(),
            name: vec![Text::new("John Doe")],
            birth_date: "1990-01-01".to_string(),
            gender: "male".to_string(),
            address: vec![Address {
                line: vec!["123 Main St".to_string()],
                city: "Anytown".to_string(),
            }],
            telecom: vec![Telecom {
                value: "(555) 123-4567".to_string(),
            }],
        },
        conditions: vec![
            condition("condition-1", "Hypertension"),
            condition("condition-2", "Type 2 Diabetes"),
        ],
        medications: vec![
            medication("med-1", "Lisinopril", "10mg daily"),
            medication("med-2", "Metformin", "500mg twice daily"),
        ],
        appointments: vec![
            appointment("appt-1", "Cardiology Follow-up", "Routine", "2023-06-15T14:30:00Z"),
            appointment("appt-2", "Endocrinology Consult", "New Patient", "2023-06-22T10:00:00Z"),
        ],
    }
}

fn med(name: &str, dosage: &str, frequency: &str) -> MedicationSummary {
    MedicationSummary {
        name: name.to_string(),
        dosage: dosage.to_string(),
        frequency: frequency.to_string(),
    }
}

fn summary(
    id: &str,
    name: &str,
    age: u32,
    condition: &str,
    expert_id: &str,
    medications: Vec<MedicationSummary>,
) -> PatientSummary {
    PatientSummary {
        id: id.to_string(),
        name: name.to_string(),
        age,
        condition: condition.to_string(),
        expert_id: expert_id.to_string(),
        medications,
    }
}

pub fn demo_roster() -> Vec<PatientSummary> {
    vec![
        summary("pat-001", "João Pereira", 58, "Hypertension", "exp-001", vec![
            med("Losartan", "50mg", "once daily"),
            med("Hydrochlorothiazide", "25mg", "once daily"),
        ]),
        summary("pat-002", "Maria Costa", 45, "Arrhythmia", "exp-001", vec![
            med("Propranolol", "40mg", "twice daily"),
            med("Amiodarone", "200mg", "once daily"),
        ]),
        summary("pat-003", "Ana Rodrigues", 32, "Dermatitis", "exp-002", vec![
            med("Body moisturiser", "topical", "twice daily"),
            med("Desonide cream", "topical", "once daily"),
        ]),
        summary("pat-004", "Pedro Silva", 41, "Psoriasis", "exp-002", vec![
            med("Methotrexate", "15mg", "once weekly"),
            med("Folic acid", "5mg", "once weekly"),
        ]),
        summary("pat-005", "Lucas Santos", 8, "Asthma", "exp-003", vec![
            med("Salbutamol spray", "100mcg", "as needed"),
            med("Budesonide spray", "200mcg", "twice daily"),
        ]),
        summary("pat-006", "Julia Lima", 5, "Food allergy", "exp-003", vec![
            med("Loratadine", "5ml", "once daily"),
            med("Epinephrine auto-injector", "0.15mg", "as needed"),
        ]),
    ]
}
