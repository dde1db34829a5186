//! Integration tests for the phone-OTP auth flow.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;
use sqlx::PgPool;

use matjar_db::repositories::OtpRepo;

/// Seed a known OTP code directly (request_otp generates random codes).
async fn seed_otp(pool: &PgPool, phone: &str, code: &str) {
    OtpRepo::create(pool, phone, code, Utc::now() + Duration::minutes(5))
        .await
        .unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn request_otp_normalizes_the_phone(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::send_json(
        app,
        "POST",
        "/api/v1/auth/otp/request",
        None,
        json!({"phone": "0501234567"}),
    )
    .await;
    let body = common::expect_json(response, StatusCode::OK).await;

    assert_eq!(body["data"]["phone"], "+966501234567");
    assert_eq!(body["data"]["expires_in"], 300);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn verify_with_unknown_phone_reports_new_status(pool: PgPool) {
    seed_otp(&pool, "+966500002000", "123456").await;
    let app = common::build_test_app(pool);

    let response = common::send_json(
        app,
        "POST",
        "/api/v1/auth/otp/verify",
        None,
        json!({"phone": "0500002000", "code": "123456"}),
    )
    .await;
    let body = common::expect_json(response, StatusCode::OK).await;

    assert_eq!(body["data"]["status"], "new");
    assert!(body["data"].get("auth").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_code_is_rejected(pool: PgPool) {
    seed_otp(&pool, "+966500002001", "123456").await;
    let app = common::build_test_app(pool);

    let response = common::send_json(
        app,
        "POST",
        "/api/v1/auth/otp/verify",
        None,
        json!({"phone": "+966500002001", "code": "000000"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn codes_are_single_use(pool: PgPool) {
    seed_otp(&pool, "+966500002002", "123456").await;

    let first = common::send_json(
        common::build_test_app(pool.clone()),
        "POST",
        "/api/v1/auth/otp/verify",
        None,
        json!({"phone": "+966500002002", "code": "123456"}),
    )
    .await;
    assert_eq!(first.status(), StatusCode::OK);

    let second = common::send_json(
        common::build_test_app(pool),
        "POST",
        "/api/v1/auth/otp/verify",
        None,
        json!({"phone": "+966500002002", "code": "123456"}),
    )
    .await;
    assert_eq!(second.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn complete_profile_creates_account_and_seeds_onboarding(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = common::send_json(
        app,
        "POST",
        "/api/v1/auth/complete-profile",
        None,
        json!({
            "phone": "0500002003",
            "sector": "cars",
            "account_type": "company",
            "full_name": "Aseel Motors",
            "company_name": "Aseel Motors LLC",
            "city": "Dammam"
        }),
    )
    .await;
    let body = common::expect_json(response, StatusCode::CREATED).await;

    let auth = &body["data"];
    assert!(auth["access_token"].is_string());
    assert!(auth["refresh_token"].is_string());
    assert_eq!(auth["user"]["phone"], "+966500002003");
    assert_eq!(auth["user"]["role"], "dealer");

    // The returned access token works, and the checklist was seeded.
    let token = auth["access_token"].as_str().unwrap();
    let response =
        common::get_authed(common::build_test_app(pool), "/api/v1/user/onboarding", token).await;
    let checklist = common::expect_json(response, StatusCode::OK).await;
    assert_eq!(checklist["data"].as_array().unwrap().len(), 7);
    assert_eq!(checklist["data"][0]["status"], "current");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_phone_is_rejected_with_409(pool: PgPool) {
    common::create_authed_user(&pool, "+966500002004").await;
    let app = common::build_test_app(pool);

    let response = common::send_json(
        app,
        "POST",
        "/api/v1/auth/complete-profile",
        None,
        json!({
            "phone": "0500002004",
            "sector": "cars",
            "account_type": "individual",
            "full_name": "Someone Else",
            "city": "Riyadh"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn individual_accounts_drop_company_name(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::send_json(
        app,
        "POST",
        "/api/v1/auth/complete-profile",
        None,
        json!({
            "phone": "0500002005",
            "sector": "realestate",
            "account_type": "individual",
            "full_name": "Sara",
            "company_name": "Should Be Ignored",
            "city": "Riyadh"
        }),
    )
    .await;
    let body = common::expect_json(response, StatusCode::CREATED).await;
    assert_eq!(body["data"]["user"]["company_name"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_rotates_the_session(pool: PgPool) {
    seed_otp(&pool, "+966500002006", "123456").await;
    common::create_authed_user(&pool, "+966500002006").await;

    let login = common::send_json(
        common::build_test_app(pool.clone()),
        "POST",
        "/api/v1/auth/otp/verify",
        None,
        json!({"phone": "+966500002006", "code": "123456"}),
    )
    .await;
    let login = common::expect_json(login, StatusCode::OK).await;
    let refresh_token = login["data"]["auth"]["refresh_token"].as_str().unwrap().to_string();

    // First refresh succeeds and returns a new pair.
    let refreshed = common::send_json(
        common::build_test_app(pool.clone()),
        "POST",
        "/api/v1/auth/refresh",
        None,
        json!({"refresh_token": refresh_token}),
    )
    .await;
    let refreshed = common::expect_json(refreshed, StatusCode::OK).await;
    let new_token = refreshed["data"]["refresh_token"].as_str().unwrap();
    assert_ne!(new_token, refresh_token);

    // The presented token was revoked by the rotation.
    let replay = common::send_json(
        common::build_test_app(pool),
        "POST",
        "/api/v1/auth/refresh",
        None,
        json!({"refresh_token": refresh_token}),
    )
    .await;
    assert_eq!(replay.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn logout_revokes_the_session(pool: PgPool) {
    seed_otp(&pool, "+966500002007", "123456").await;
    common::create_authed_user(&pool, "+966500002007").await;

    let login = common::send_json(
        common::build_test_app(pool.clone()),
        "POST",
        "/api/v1/auth/otp/verify",
        None,
        json!({"phone": "+966500002007", "code": "123456"}),
    )
    .await;
    let login = common::expect_json(login, StatusCode::OK).await;
    let refresh_token = login["data"]["auth"]["refresh_token"].as_str().unwrap().to_string();

    let logout = common::send_json(
        common::build_test_app(pool.clone()),
        "POST",
        "/api/v1/auth/logout",
        None,
        json!({"refresh_token": refresh_token}),
    )
    .await;
    let logout = common::expect_json(logout, StatusCode::OK).await;
    assert_eq!(logout["data"]["revoked"], true);

    let replay = common::send_json(
        common::build_test_app(pool),
        "POST",
        "/api/v1/auth/refresh",
        None,
        json!({"refresh_token": refresh_token}),
    )
    .await;
    assert_eq!(replay.status(), StatusCode::UNAUTHORIZED);
}
