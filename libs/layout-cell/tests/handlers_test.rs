use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::{json, Value};
use tower::ServiceExt;

use layout_cell::{layout_routes, LayoutService};
use shared_utils::test_utils::{read_json, TestConfig, TestRequests};

fn create_app() -> axum::Router {
    layout_routes(Arc::new(LayoutService::new(TestConfig::default().to_arc())))
}

fn branded_header(top: f64) -> Value {
    json!({
        "tag": "header",
        "top": top,
        "children": [
            { "tag": "img", "attributes": { "src": "/logo.png", "alt": "SequoiaHealth Logo" } },
            { "tag": "span", "text": "SequoiaHealth" }
        ]
    })
}

fn page(children: Vec<Value>) -> Value {
    json!({ "tag": "body", "children": children })
}

#[tokio::test]
async fn test_consolidate_keeps_topmost_header() {
    let body = json!({
        "document": page(vec![branded_header(64.0), branded_header(0.0), branded_header(200.0)])
    });

    let response = create_app()
        .oneshot(TestRequests::json("POST", "/consolidate-headers", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;

    assert_eq!(json["candidates"], 3);
    assert_eq!(json["kept"], json!([1]));
    assert_eq!(json["removed"], json!([[0], [2]]));

    let children = json["document"]["children"].as_array().unwrap();
    assert_eq!(children[0]["attributes"]["data-removed-duplicate"], "true");
    assert_eq!(children[0]["attributes"]["style"], "display: none");
    assert!(children[1].get("attributes").is_none());
    assert_eq!(children[2]["attributes"]["data-removed-duplicate"], "true");
}

#[tokio::test]
async fn test_single_header_is_left_alone() {
    let body = json!({ "document": page(vec![branded_header(0.0)]) });

    let json = read_json(
        create_app()
            .oneshot(TestRequests::json("POST", "/consolidate-headers", body))
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(json["candidates"], 1);
    assert_eq!(json["kept"], json!([0]));
    assert_eq!(json["removed"], json!([]));
}

#[tokio::test]
async fn test_no_branded_header_reports_null_kept() {
    let body = json!({ "document": page(vec![json!({ "tag": "nav", "text": "Menu" })]) });

    let json = read_json(
        create_app()
            .oneshot(TestRequests::json("POST", "/consolidate-headers", body))
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(json["candidates"], 0);
    assert!(json["kept"].is_null());
}

#[tokio::test]
async fn test_advanced_mode_with_custom_selector() {
    let body = json!({
        "mode": "advanced",
        "customSelectors": [".portal-bar"],
        "document": page(vec![
            json!({ "tag": "div", "classes": ["portal-bar"], "top": 48.0, "text": "Sequoia Health" }),
            json!({ "tag": "div", "classes": ["fixed", "top-0"], "top": 0.0, "id": "main-header" }),
        ])
    });

    let json = read_json(
        create_app()
            .oneshot(TestRequests::json("POST", "/consolidate-headers", body))
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(json["candidates"], 2);
    assert_eq!(json["kept"], json!([1]));
    assert_eq!(json["removed"], json!([[0]]));
}

#[tokio::test]
async fn test_invalid_custom_selector_is_bad_request() {
    let body = json!({
        "mode": "advanced",
        "customSelectors": ["header > nav"],
        "document": page(vec![])
    });

    let response = create_app()
        .oneshot(TestRequests::json("POST", "/consolidate-headers", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = read_json(response).await;
    assert!(json["error"].as_str().unwrap().starts_with("Invalid selector"));
}

#[tokio::test]
async fn test_malformed_body_is_internal_error() {
    let response = create_app()
        .oneshot(TestRequests::raw("POST", "/consolidate-headers", "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = read_json(response).await;
    assert_eq!(json["error"], "Failed to consolidate headers");
}
