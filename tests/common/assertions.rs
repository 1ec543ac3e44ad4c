//! Custom assertions for JSON error bodies

use axum::http::StatusCode;
use axum_test::TestResponse;
use serde_json::json;

/// Assert the status and the `{error, status}` body of an error response
pub fn assert_error(response: &TestResponse, status: StatusCode, message: &str) {
    assert_eq!(response.status_code(), status, "body: {}", response.text());
    let body: serde_json::Value = response.json();
    pretty_assertions::assert_eq!(body, json!({ "error": message, "status": status.as_u16() }));
}
