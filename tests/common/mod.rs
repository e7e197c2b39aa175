//! Shared test utilities for LogPilot integration tests.
//!
//! Every test gets its own `wiremock` server standing in for the backend.

#![allow(dead_code)]

use logpilot::api::{HttpGateway, PilotApi};
use logpilot::config::ApiConfig;
use logpilot::ui::UiStore;
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Query timeout used against mock servers.
pub const TEST_TIMEOUT_SECS: u64 = 5;

/// Gateway pointed at `server`.
pub fn gateway(server: &MockServer) -> Arc<dyn PilotApi> {
    let config = ApiConfig {
        base_url: server.uri(),
        timeout_seconds: TEST_TIMEOUT_SECS,
        health_timeout_seconds: TEST_TIMEOUT_SECS,
    };
    Arc::new(HttpGateway::new(&config).unwrap())
}

pub fn store() -> Arc<UiStore> {
    Arc::new(UiStore::new())
}

/// Answer `GET {route}` with `body`.
pub async fn mount_get(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub fn health_body(status: &str, model: &str) -> Value {
    json!({ "llm": { "status": status, "model": model } })
}

pub fn alert_body(id: &str, service: &str) -> Value {
    json!({
        "id": id,
        "service": service,
        "message": format!("{} error rate above 10%", service),
        "analysis": "Connection pool exhausted",
        "timestamp": "2024-05-01T10:00:00"
    })
}

pub fn run_body(run_id: &str, pass_rate: f64) -> Value {
    json!({
        "run_id": run_id,
        "timestamp": "2024-05-01T10:00:00Z",
        "pass_rate": pass_rate
    })
}
