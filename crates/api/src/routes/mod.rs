//! Route tree for the API.

pub mod account;
pub mod auth;
pub mod health;
pub mod listings;
pub mod onboarding;
pub mod packages;
pub mod sites;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/otp/request                      request OTP (public)
/// /auth/otp/verify                       verify OTP (public)
/// /auth/complete-profile                 create account + seed onboarding (public)
/// /auth/refresh                          rotate refresh token (public)
/// /auth/logout                           revoke refresh session (public)
///
/// /account/profile                       get, update own profile
/// /account/verifications/nafath          record identity verification (POST)
/// /account/verifications/license         record license verification (POST)
///
/// /user/onboarding                       checklist (GET)
/// /user/onboarding/steps/{key}/complete  mark step done (POST)
///
/// /listings                              list, create
/// /listings/{id}                         get, update, delete
///
/// /site                                  get (?sector=), upsert (PUT)
/// /sites/{slug}                          public storefront (GET)
///
/// /packages                              catalog (GET, public)
/// /packages/subscribe                    subscribe (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (phone OTP + profile completion).
        .nest("/auth", auth::router())
        // Own-account profile and verifications.
        .nest("/account", account::router())
        // Onboarding checklist.
        .nest("/user/onboarding", onboarding::router())
        // Dealer listings.
        .nest("/listings", listings::router())
        // Own storefront (singular resource per sector).
        .nest("/site", sites::router())
        // Public storefront reads.
        .nest("/sites", sites::public_router())
        // Subscription packages.
        .nest("/packages", packages::router())
}
