//! Test utilities for router tests.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use loresmith_database::InMemoryStore;
use loresmith_server::{AppState, create_router};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub mod mock_driver;

pub use mock_driver::MockDriver;

/// Router over an in-memory store and the given driver.
pub fn test_app(driver: MockDriver) -> (Router, InMemoryStore, Arc<MockDriver>) {
    let store = InMemoryStore::new();
    let driver = Arc::new(driver);
    let state = AppState::new(Arc::new(store.clone()), driver.clone());
    (create_router(state), store, driver)
}

/// Send one request and decode the JSON body (`Null` when empty).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Body is not JSON")
    };
    (status, json)
}
