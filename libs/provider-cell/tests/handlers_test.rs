use std::sync::Arc;
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use provider_cell::{provider_routes, ProviderService};
use shared_utils::test_utils::{read_json, TestRequests};

fn create_app() -> axum::Router {
    provider_routes(Arc::new(ProviderService::new()))
}

#[tokio::test]
async fn test_list_providers_returns_directory() {
    let response = create_app().oneshot(TestRequests::get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;

    assert_eq!(json["total"], 3);
    assert_eq!(json["providers"][0]["id"], "prov-001");
    assert_eq!(json["providers"][0]["inPerson"], true);
    assert_eq!(json["providers"][2]["inPerson"], false);
    assert_eq!(json["providers"][1]["languages"], json!(["Portuguese", "English"]));
}

#[tokio::test]
async fn test_list_providers_filters_by_search_and_specialty() {
    let json = read_json(
        create_app()
            .oneshot(TestRequests::get("/?search=ana&specialty=Cardiology"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["providers"][0]["name"], "Dra. Ana Silva");

    let json = read_json(
        create_app()
            .oneshot(TestRequests::get("/?specialty=all&search=DERMA"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["providers"][0]["id"], "prov-002");

    let json = read_json(
        create_app()
            .oneshot(TestRequests::get("/?specialty=Neurology"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(json["total"], 0);
    assert_eq!(json["providers"], json!([]));
}

#[tokio::test]
async fn test_get_provider_by_id() {
    let response = create_app().oneshot(TestRequests::get("/prov-003")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["specialty"], "Pediatrics");
    assert_eq!(json["subspecialties"], json!(["Neonatology", "Pediatric Allergy"]));
    assert_eq!(json["telemedicine"], true);
}

#[tokio::test]
async fn test_unknown_provider_is_not_found() {
    let response = create_app().oneshot(TestRequests::get("/prov-404")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = read_json(response).await;
    assert_eq!(json["error"], "Provider not found");
}

#[tokio::test]
async fn test_specialties_are_distinct_and_sorted() {
    let response = create_app().oneshot(TestRequests::get("/specialties")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["specialties"], json!(["Cardiology", "Dermatology", "Pediatrics"]));
}

#[tokio::test]
async fn test_subspecialties_span_the_directory() {
    let json = read_json(
        create_app().oneshot(TestRequests::get("/subspecialties")).await.unwrap(),
    )
    .await;

    assert_eq!(
        json["subspecialties"],
        json!([
            "Dermatologic Surgery",
            "Heart Failure",
            "Neonatology",
            "Pediatric Allergy",
            "Preventive Cardiology"
        ])
    );
}

#[tokio::test]
async fn test_languages_are_distinct_and_sorted() {
    let response = create_app().oneshot(TestRequests::get("/languages")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["languages"], json!(["English", "French", "Portuguese", "Spanish"]));
}
