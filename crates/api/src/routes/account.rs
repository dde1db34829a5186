//! Route definitions for the `/account` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::account;
use crate::state::AppState;

/// Routes mounted at `/account`.
///
/// ```text
/// GET  /profile                -> get_profile
/// PUT  /profile                -> update_profile
/// POST /verifications/nafath   -> verify_nafath
/// POST /verifications/license  -> verify_license
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(account::get_profile).put(account::update_profile),
        )
        .route("/verifications/nafath", post(account::verify_nafath))
        .route("/verifications/license", post(account::verify_license))
}
