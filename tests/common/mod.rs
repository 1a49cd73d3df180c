//! Common test utilities and helpers
//!
//! Every integration test drives the real router through `axum_test` over a
//! fresh `MemoryUserStore`, so tests never share users.

#![allow(dead_code)]

use std::sync::Arc;

use axum::http::{header, HeaderName, HeaderValue};
use axum_test::TestServer;
use serde_json::{json, Value};
use userbase::backend::build_app;
use userbase::backend::users::MemoryUserStore;
use userbase::shared::AppConfig;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Test user credentials
pub struct TestUser {
    pub id: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

pub fn test_config(require_auth: bool) -> AppConfig {
    AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .require_auth(require_auth)
        .build()
        .expect("valid test config")
}

/// Server plus a handle on its store, for closing it or counting users
pub fn test_server(require_auth: bool) -> (TestServer, Arc<MemoryUserStore>) {
    let store = Arc::new(MemoryUserStore::new());
    let app = build_app(&test_config(require_auth), store.clone());
    let server = TestServer::new(app.router).expect("test server");
    (server, store)
}

/// `Authorization: Bearer <token>`
pub fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    let value = HeaderValue::from_str(&format!("Bearer {token}")).expect("valid header value");
    (header::AUTHORIZATION, value)
}

/// Register through the API and return the credentials
pub async fn register_user(server: &TestServer, name: &str, email: &str, password: &str) -> TestUser {
    let response = server
        .post("/api/auth/register")
        .json(&json!({ "name": name, "email": email, "password": password }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let body: Value = response.json();
    TestUser {
        id: body["_id"].as_str().expect("_id").to_string(),
        email: body["email"].as_str().expect("email").to_string(),
        password: password.to_string(),
        token: body["token"].as_str().expect("token").to_string(),
    }
}

/// Assert the standard error body and return its message
pub fn error_message(body: &Value, status: u16) -> String {
    assert_eq!(body["status"], status, "unexpected error body: {body}");
    assert!(body["error"].is_string(), "missing error kind: {body}");
    body["message"].as_str().expect("message").to_string()
}
