//! Common test utilities for integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use empleados_backend::{api, db::Database, state::AppState};
use serde::de::DeserializeOwned;
use tower::ServiceExt;

/// Creates a router over a private in-memory SQLite database.
pub async fn create_test_router() -> Router {
    let db = Database::in_memory()
        .await
        .expect("Failed to open in-memory database");
    api::router(AppState::from_database(&db))
}

/// Helper to make GET requests.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Helper to make POST requests with JSON body.
pub fn post_json_request(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Helper to make PUT requests with JSON body.
pub fn put_json_request(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Helper to make DELETE requests.
pub fn delete_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Sends request and parses JSON response.
pub async fn send_request<T: DeserializeOwned>(
    app: &Router,
    request: Request<Body>,
) -> (StatusCode, T) {
    let (status, body) = send_request_raw(app, request).await;
    let parsed: T = serde_json::from_str(&body).unwrap_or_else(|e| {
        panic!("Failed to parse response: {} - Body: {:?}", e, body)
    });
    (status, parsed)
}

/// Sends request and returns raw response body.
pub async fn send_request_raw(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&body).to_string())
}
