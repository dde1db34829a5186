//! Shared helpers for API integration tests.
//!
//! Tests build the production router via `build_app_router` so they
//! exercise the same middleware stack (CORS, request ID, timeout, tracing,
//! panic recovery) that production uses.

// Each integration test binary compiles this module separately and uses a
// different subset of the helpers.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;

use matjar_api::auth::jwt::{generate_access_token, JwtConfig};
use matjar_api::config::ServerConfig;
use matjar_api::router::build_app_router;
use matjar_api::state::AppState;
use matjar_core::sectors::{AccountType, Sector};
use matjar_db::models::user::{CreateUser, User};
use matjar_db::repositories::{OnboardingRepo, UserRepo};

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        otp_expiry_mins: 5,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 30,
        },
    }
}

/// Build the full application router backed by the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Create a dealer account with a seeded onboarding checklist, returning
/// the user and a valid Bearer token.
pub async fn create_authed_user(pool: &PgPool, phone: &str) -> (User, String) {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            phone: phone.to_string(),
            full_name: "Test Dealer".to_string(),
            account_type: AccountType::Individual,
            sector: Sector::Cars,
            company_name: None,
            email: None,
            city: "Riyadh".to_string(),
        },
    )
    .await
    .expect("user creation should succeed");

    OnboardingRepo::initialize(pool, user.id)
        .await
        .expect("onboarding initialization should succeed");

    let token = generate_access_token(user.id, &user.role, &test_config().jwt)
        .expect("token generation should succeed");

    (user, token)
}

/// Send a GET request without authentication.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get_authed(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a JSON request with the given method, optionally authenticated.
pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a bodyless POST, optionally authenticated.
pub async fn post_empty(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = builder.body(Body::empty()).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Decode a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    use http_body_util::BodyExt;
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be valid JSON")
}

/// Assert a status and decode the body in one step.
pub async fn expect_json(response: Response<Body>, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
