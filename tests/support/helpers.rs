// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use std::sync::Arc;
use user_registry::application::services::ApplicationServices;
use user_registry::presentation::http::{routes::build_router, state::HttpState};

pub fn build_test_services(repo: Arc<mocks::InMemoryUserRepo>) -> ApplicationServices {
    ApplicationServices::new(
        repo,
        Arc::new(mocks::CountingPasswordHasher::default()),
        Arc::new(mocks::DummyClock),
    )
}

pub fn build_test_state(repo: Arc<mocks::InMemoryUserRepo>) -> HttpState {
    HttpState {
        services: Arc::new(build_test_services(repo)),
    }
}

/// Router backed by a fresh in-memory repository, returned alongside it so
/// tests can inspect what was stored.
pub fn make_test_router() -> (axum::Router, Arc<mocks::InMemoryUserRepo>) {
    let repo = Arc::new(mocks::InMemoryUserRepo::new());
    let router = build_router(build_test_state(Arc::clone(&repo)));
    (router, repo)
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> String {
    assert_eq!(resp.status(), expected_status);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    msg_field.to_string()
}
