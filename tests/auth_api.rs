//! Authentication API integration tests
//!
//! Registration, login, the current-user endpoint and the bearer-token guard.

mod common;

use axum::body::Bytes;
use axum::http::{header, HeaderValue, StatusCode};
use common::{bearer, error_message, register_user, test_server, TEST_SECRET};
use jsonwebtoken::{encode, get_current_timestamp, EncodingKey, Header};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use userbase::backend::auth::Claims;
use userbase::backend::users::UserStore;
use uuid::Uuid;

#[tokio::test]
async fn test_register_then_list_with_token() {
    let (server, _) = test_server(true);

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "name": "A", "email": "a@x.com", "password": "p" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    let token = body["token"].as_str().expect("token");
    assert_eq!(body["name"], "A");
    assert!(body.get("password").is_none());

    let (name, value) = bearer(token);
    let response = server.get("/api/users").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let users: Value = response.json();
    let users = users.as_array().expect("array");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["name"], "A");
    assert!(users[0].get("password").is_none());
}

#[tokio::test]
async fn test_register_missing_field_creates_nothing() {
    let (server, store) = test_server(true);

    for body in [
        json!({ "email": "a@x.com", "password": "p" }),
        json!({ "name": "A", "password": "p" }),
        json!({ "name": "A", "email": "a@x.com" }),
        json!({ "name": "A", "email": "a@x.com", "password": "" }),
    ] {
        let response = server.post("/api/auth/register").json(&body).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "body: {body}");
    }
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let (server, store) = test_server(true);
    register_user(&server, "A", "a@x.com", "p").await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "name": "B", "email": "a@x.com", "password": "q" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&response.json(), 400), "Email already exists");
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_invalid_tokens_are_unauthorized() {
    let (server, _) = test_server(true);

    for value in ["Bearer invalid.token.here", "Bearer", "Basic YTpi", "token-without-scheme"] {
        let response = server
            .get("/api/users")
            .add_header(header::AUTHORIZATION, HeaderValue::from_static(value))
            .await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED, "header: {value}");
        error_message(&response.json(), 401);
    }
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let (server, _) = test_server(true);
    let issued = get_current_timestamp() - 7200;
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        iat: issued,
        exp: issued + 3600,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let (name, value) = bearer(&token);
    let response = server.get("/api/users").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(error_message(&response.json(), 401), "Invalid or expired token");
}

#[tokio::test]
async fn test_token_signed_with_another_secret_is_unauthorized() {
    let (server, _) = test_server(true);
    let now = get_current_timestamp();
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        iat: now,
        exp: now + 3600,
    };
    let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(b"not-the-secret")).unwrap();

    let (name, value) = bearer(&token);
    server
        .get("/api/users")
        .add_header(name, value)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_returns_working_token() {
    let (server, _) = test_server(true);
    let user = register_user(&server, "A", "a@x.com", "password123").await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "A@x.com", "password": "password123" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["_id"], user.id);
    let token = body["token"].as_str().expect("token");

    let (name, value) = bearer(token);
    let me: Value = server.get("/api/auth/me").add_header(name, value).await.json();
    assert_eq!(me["_id"], user.id);
    assert_eq!(me["email"], "a@x.com");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let (server, _) = test_server(true);
    register_user(&server, "A", "a@x.com", "password123").await;

    let wrong_password = server
        .post("/api/auth/login")
        .json(&json!({ "email": "a@x.com", "password": "nope" }))
        .await;
    let unknown_email = server
        .post("/api/auth/login")
        .json(&json!({ "email": "b@x.com", "password": "password123" }))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.json::<Value>(), unknown_email.json::<Value>());
}

#[tokio::test]
async fn test_login_missing_field_is_bad_request() {
    let (server, _) = test_server(true);

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "a@x.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&response.json(), 400), "password is required");
}

#[tokio::test]
async fn test_me_requires_token_even_without_guard_on_users() {
    let (server, _) = test_server(false);

    server.get("/api/users").await.assert_status_ok();
    server
        .get("/api/auth/me")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_for_unknown_user_is_not_found() {
    let (server, _) = test_server(true);
    let now = get_current_timestamp();
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        iat: now,
        exp: now + 3600,
    };
    let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(TEST_SECRET.as_bytes())).unwrap();

    let (name, value) = bearer(&token);
    let response = server.get("/api/auth/me").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    error_message(&response.json(), 404);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let (server, store) = test_server(false);

    let response = server
        .post("/api/users")
        .content_type("application/json")
        .bytes(Bytes::from_static(b"{\"name\": \"A\", "))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    error_message(&response.json(), 400);

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "name": 42, "email": "a@x.com", "password": "p" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_index_and_unknown_routes() {
    let (server, _) = test_server(true);

    let response = server.get("/").await;
    response.assert_status_ok();
    assert!(!response.text().is_empty());

    let response = server.get("/api/nope").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(&response.json(), 404), "Route not found");
}

#[tokio::test]
async fn test_password_longer_than_bcrypt_input_is_rejected() {
    let (server, store) = test_server(true);
    let prefix = "a".repeat(71);

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "name": "A", "email": "a@x.com", "password": format!("{prefix}SECRET1") }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(store.count().await.unwrap(), 0);

    register_user(&server, "A", "a@x.com", &prefix).await;
    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "a@x.com", "password": format!("{prefix}OTHER") }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>().get("token").is_none());

    server
        .post("/api/auth/login")
        .json(&json!({ "email": "a@x.com", "password": prefix }))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_wrong_method_gets_standard_error_body() {
    let (server, _) = test_server(true);

    let response = server.put("/api/users").json(&json!({})).await;

    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(error_message(&response.json(), 405), "Method not allowed");
}
