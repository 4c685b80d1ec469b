//! Integration tests for GET /health.

use crate::common::*;
use axum::http::StatusCode;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn health_check_reports_healthy() {
    let app = spawn_app().await;

    let (status, body) = get(&app.router, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
