//! Test harness for driving the router without a network listener.

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use gift_core::kernel::TestDependencies;
use gift_core::server::{build_app, AppOptions};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Router over mock collaborators. Rate limiting needs ConnectInfo, which
/// `oneshot` does not provide, so it stays off here.
pub fn test_app(deps: &TestDependencies) -> Router {
    build_app(deps.server_deps(), AppOptions::default())
}

/// Router whose Completion Service has no credentials
pub fn test_app_without_credentials(deps: &TestDependencies) -> Router {
    build_app(deps.server_deps_without_credentials(), AppOptions::default())
}

/// Send a request and return the status plus the parsed JSON body
pub async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

pub async fn post_generate(app: Router, body: &str) -> (StatusCode, Value) {
    send(app, Method::POST, "/api/generate", Some(body)).await
}

/// A well-formed gift object as a model would emit it
pub fn gift_json(title: &str, low: &str, high: &str) -> Value {
    json!({
        "title": title,
        "description": format!("A great {}", title.to_lowercase()),
        "searchTerm": title.to_lowercase(),
        "priceRange": [low, high],
        "interests": ["Tech"],
        "occasions": ["Birthday"]
    })
}
