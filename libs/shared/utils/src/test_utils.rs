use std::sync::Arc;
use axum::{
    body::Body,
    http::{Request, Response},
};
use serde_json::Value;

use shared_config::AppConfig;

pub struct TestConfig {
    pub meeting_base_url: String,
    pub join_window_before_minutes: i64,
    pub join_window_after_minutes: i64,
    pub clinic_utc_offset_minutes: i32,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            meeting_base_url: "https://meet.test".to_string(),
            join_window_before_minutes: 15,
            join_window_after_minutes: 30,
            clinic_utc_offset_minutes: 0,
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            meeting_base_url: self.meeting_base_url.clone(),
            join_window_before_minutes: self.join_window_before_minutes,
            join_window_after_minutes: self.join_window_after_minutes,
            clinic_utc_offset_minutes: self.clinic_utc_offset_minutes,
            simulated_latency_ms: 0,
            header_consolidation_delay_ms: 0,
            ..AppConfig::default()
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct TestRequests;

impl TestRequests {
    pub fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    pub fn json(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn raw(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }
}

pub async fn read_json(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}
