use std::sync::Arc;
use axum::http::StatusCode;
use tower::ServiceExt;

use patient_cell::{patient_routes, PatientService};
use shared_utils::test_utils::{read_json, TestRequests};

fn create_app() -> axum::Router {
    patient_routes(Arc::new(PatientService::new()))
}

#[tokio::test]
async fn test_get_patient_returns_mock_bundle() {
    let response = create_app()
        .oneshot(TestRequests::get("/pat-001"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;

    assert_eq!(json["patient"]["id"], "example-patient-id");
    assert_eq!(json["patient"]["name"][0]["text"], "John Doe");
    assert_eq!(json["patient"]["birthDate"], "1990-01-01");
    assert_eq!(json["conditions"][1]["resource"]["code"]["text"], "Type 2 Diabetes");
    assert_eq!(
        json["conditions"][0]["resource"]["clinicalStatus"]["coding"][0]["code"],
        "active"
    );
    assert_eq!(
        json["medications"][0]["resource"]["medicationCodeableConcept"]["text"],
        "Lisinopril"
    );
    assert_eq!(
        json["medications"][1]["resource"]["dosageInstruction"][0]["text"],
        "500mg twice daily"
    );
    assert_eq!(json["appointments"][0]["resource"]["start"], "2023-06-15T14:30:00Z");
}

#[tokio::test]
async fn test_get_patient_is_identical_for_any_id() {
    let first = read_json(
        create_app().oneshot(TestRequests::get("/pat-001")).await.unwrap(),
    )
    .await;
    let second = read_json(
        create_app().oneshot(TestRequests::get("/does-not-exist")).await.unwrap(),
    )
    .await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_list_patients_for_expert() {
    let response = create_app()
        .oneshot(TestRequests::get("/?expertId=exp-003"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["total"], 2);
    assert_eq!(json["patients"][0]["name"], "Lucas Santos");
    assert_eq!(json["patients"][1]["medications"][1]["frequency"], "as needed");
}

#[tokio::test]
async fn test_list_all_patients() {
    let json = read_json(create_app().oneshot(TestRequests::get("/")).await.unwrap()).await;
    assert_eq!(json["total"], 6);
}
