//! Integration tests for the onboarding checklist endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn checklist_requires_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/user/onboarding").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn fresh_user_sees_seven_steps_with_nafath_current(pool: PgPool) {
    let (_, token) = common::create_authed_user(&pool, "+966500001000").await;
    let app = common::build_test_app(pool);

    let response = common::get_authed(app, "/api/v1/user/onboarding", &token).await;
    let json = common::expect_json(response, StatusCode::OK).await;

    let steps = json["data"].as_array().expect("data should be an array");
    assert_eq!(steps.len(), 7);
    assert_eq!(steps[0]["step_key"], "nafath");
    assert_eq!(steps[0]["status"], "current");
    assert_eq!(steps[0]["completed_at"], serde_json::Value::Null);
    for step in &steps[1..] {
        assert_eq!(step["status"], "pending");
    }

    // Sorted by step_order ascending.
    let orders: Vec<i64> = steps
        .iter()
        .map(|s| s["step_order"].as_i64().unwrap())
        .collect();
    assert_eq!(orders, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn completing_a_step_returns_the_updated_checklist(pool: PgPool) {
    let (_, token) = common::create_authed_user(&pool, "+966500001001").await;
    let app = common::build_test_app(pool.clone());

    let response = common::post_empty(
        app,
        "/api/v1/user/onboarding/steps/nafath/complete",
        Some(&token),
    )
    .await;
    let json = common::expect_json(response, StatusCode::OK).await;

    let steps = json["data"].as_array().unwrap();
    assert_eq!(steps[0]["step_key"], "nafath");
    assert_eq!(steps[0]["status"], "done");
    assert!(steps[0]["completed_at"].is_string());
    assert_eq!(steps[1]["step_key"], "faal_license");
    assert_eq!(steps[1]["status"], "current");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn completing_a_done_step_is_idempotent(pool: PgPool) {
    let (_, token) = common::create_authed_user(&pool, "+966500001002").await;

    let first = common::post_empty(
        common::build_test_app(pool.clone()),
        "/api/v1/user/onboarding/steps/plan/complete",
        Some(&token),
    )
    .await;
    let first = common::expect_json(first, StatusCode::OK).await;

    let second = common::post_empty(
        common::build_test_app(pool.clone()),
        "/api/v1/user/onboarding/steps/plan/complete",
        Some(&token),
    )
    .await;
    let second = common::expect_json(second, StatusCode::OK).await;

    assert_eq!(first, second, "repeat completion must change nothing");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_step_key_returns_404(pool: PgPool) {
    let (_, token) = common::create_authed_user(&pool, "+966500001003").await;
    let app = common::build_test_app(pool);

    let response = common::post_empty(
        app,
        "/api/v1/user/onboarding/steps/upload_logo/complete",
        Some(&token),
    )
    .await;
    let json = common::expect_json(response, StatusCode::NOT_FOUND).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn uninitialized_user_gets_empty_list_and_404_on_complete(pool: PgPool) {
    // An account created outside the normal signup flow has no checklist.
    use matjar_api::auth::jwt::generate_access_token;
    use matjar_core::sectors::{AccountType, Sector};
    use matjar_db::models::user::CreateUser;
    use matjar_db::repositories::UserRepo;

    let user = UserRepo::create(
        &pool,
        &CreateUser {
            phone: "+966500001004".to_string(),
            full_name: "Legacy Dealer".to_string(),
            account_type: AccountType::Individual,
            sector: Sector::Cars,
            company_name: None,
            email: None,
            city: "Riyadh".to_string(),
        },
    )
    .await
    .unwrap();
    let token = generate_access_token(user.id, &user.role, &common::test_config().jwt).unwrap();

    let response =
        common::get_authed(common::build_test_app(pool.clone()), "/api/v1/user/onboarding", &token)
            .await;
    let json = common::expect_json(response, StatusCode::OK).await;
    assert_eq!(json["data"], json!([]));

    let response = common::post_empty(
        common::build_test_app(pool),
        "/api/v1/user/onboarding/steps/nafath/complete",
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
