//! Integration tests for storefront endpoints and their onboarding triggers.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

async fn step_status(pool: PgPool, token: &str, key: &str) -> String {
    let checklist = common::get_authed(
        common::build_test_app(pool),
        "/api/v1/user/onboarding",
        token,
    )
    .await;
    let checklist = common::expect_json(checklist, StatusCode::OK).await;
    checklist["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["step_key"] == key)
        .unwrap()["status"]
        .as_str()
        .unwrap()
        .to_string()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn saving_a_draft_site_marks_site_setup_only(pool: PgPool) {
    let (_, token) = common::create_authed_user(&pool, "+966500004000").await;

    let response = common::send_json(
        common::build_test_app(pool.clone()),
        "PUT",
        "/api/v1/site",
        Some(&token),
        json!({
            "sector": "cars",
            "slug": "desert-motors",
            "name": "Desert Motors",
            "template_key": "car_classic"
        }),
    )
    .await;
    let body = common::expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"]["is_published"], false);

    assert_eq!(step_status(pool.clone(), &token, "site_setup").await, "done");
    assert_ne!(step_status(pool, &token, "publish_site").await, "done");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn publishing_marks_publish_site_done(pool: PgPool) {
    let (_, token) = common::create_authed_user(&pool, "+966500004001").await;

    let response = common::send_json(
        common::build_test_app(pool.clone()),
        "PUT",
        "/api/v1/site",
        Some(&token),
        json!({
            "sector": "cars",
            "slug": "oasis-cars",
            "template_key": "car_modern",
            "is_published": true
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(step_status(pool.clone(), &token, "site_setup").await, "done");
    assert_eq!(step_status(pool, &token, "publish_site").await, "done");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_template_key_is_rejected(pool: PgPool) {
    let (_, token) = common::create_authed_user(&pool, "+966500004002").await;
    let app = common::build_test_app(pool);

    let response = common::send_json(
        app,
        "PUT",
        "/api/v1/site",
        Some(&token),
        json!({
            "sector": "cars",
            "slug": "valid-slug",
            "template_key": "car_retro"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_slug_is_rejected(pool: PgPool) {
    let (_, token) = common::create_authed_user(&pool, "+966500004003").await;
    let app = common::build_test_app(pool);

    let response = common::send_json(
        app,
        "PUT",
        "/api/v1/site",
        Some(&token),
        json!({
            "sector": "cars",
            "slug": "Bad Slug!",
            "template_key": "car_classic"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn public_read_serves_only_published_sites(pool: PgPool) {
    let (_, token) = common::create_authed_user(&pool, "+966500004004").await;

    let save = |published: bool| {
        json!({
            "sector": "cars",
            "slug": "gulf-auto",
            "template_key": "car_luxury",
            "is_published": published
        })
    };

    let response = common::send_json(
        common::build_test_app(pool.clone()),
        "PUT",
        "/api/v1/site",
        Some(&token),
        save(false),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let hidden = common::get(common::build_test_app(pool.clone()), "/api/v1/sites/gulf-auto").await;
    assert_eq!(hidden.status(), StatusCode::NOT_FOUND);

    let response = common::send_json(
        common::build_test_app(pool.clone()),
        "PUT",
        "/api/v1/site",
        Some(&token),
        save(true),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let public = common::get(common::build_test_app(pool), "/api/v1/sites/gulf-auto").await;
    let public = common::expect_json(public, StatusCode::OK).await;
    assert_eq!(public["data"]["slug"], "gulf-auto");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn my_site_is_null_before_setup(pool: PgPool) {
    let (_, token) = common::create_authed_user(&pool, "+966500004005").await;
    let app = common::build_test_app(pool);

    let response = common::get_authed(app, "/api/v1/site?sector=cars", &token).await;
    let body = common::expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"], serde_json::Value::Null);
}
