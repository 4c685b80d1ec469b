//! In-process request helpers.
//!
//! Requests are driven through `tower::ServiceExt::oneshot` against the
//! router, so every test exercises the full HTTP surface (routing,
//! extraction, status codes, bodies) without a listening socket.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, "GET", uri, None).await
}

pub async fn post_json(router: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(router, "POST", uri, Some(body)).await
}

pub async fn put_json(router: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(router, "PUT", uri, Some(body)).await
}

pub async fn patch_json(router: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    send(router, "PATCH", uri, Some(body)).await
}

pub async fn delete(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, "DELETE", uri, None).await
}

/// Sends one request and collects the response as JSON.
///
/// An empty response body (e.g. 204) is returned as `Value::Null`.
async fn send(router: &Router, method: &str, uri: &str, body: Option<&Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, json)
}
