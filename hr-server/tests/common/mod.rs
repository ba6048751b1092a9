#![allow(dead_code)]

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use hr_server::auth::JwtConfig;
use hr_server::{Config, ServerState};
use serde_json::{Value, json};
use tower::util::ServiceExt;

pub struct TestContext {
    pub state: ServerState,
    pub app: axum::Router,
}

pub fn build_test_context() -> TestContext {
    let config = Config::with_jwt(JwtConfig {
        secret: "integration-test-secret-key-32-chars!".to_string(),
        expiration_minutes: 60,
    });
    let state = ServerState::initialize(&config).expect("seed data should load");
    let app = hr_server::api::build_app(state.clone());
    TestContext { state, app }
}

pub async fn request_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }

    let req = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    let resp = app
        .clone()
        .oneshot(req)
        .await
        .expect("router should respond");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

pub async fn login(app: &axum::Router, username: &str, password: &str) -> (StatusCode, Value) {
    request_json(
        app,
        "POST",
        "/auth/login",
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await
}

pub async fn admin_token(app: &axum::Router) -> String {
    let (status, body) = login(app, "admin", "admin123").await;
    assert_eq!(status, StatusCode::OK, "admin login failed: {body}");
    body["access_token"]
        .as_str()
        .expect("access_token should be a string")
        .to_string()
}
