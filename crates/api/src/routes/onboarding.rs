//! Route definitions for the onboarding checklist.
//!
//! Mounted at `/user/onboarding` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::onboarding;
use crate::state::AppState;

/// Onboarding routes.
///
/// ```text
/// GET  /                              -> get_onboarding
/// POST /steps/{step_key}/complete     -> complete_step
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(onboarding::get_onboarding))
        .route(
            "/steps/{step_key}/complete",
            post(onboarding::complete_step),
        )
}
