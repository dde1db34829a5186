//! Handlers for the subscription package catalog.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use matjar_core::onboarding::StepKey;
use matjar_core::packages;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

use super::triggers;

// ---------------------------------------------------------------------------
// GET /packages
// ---------------------------------------------------------------------------

/// List all packages. Public: shown on the pricing page before signup.
pub async fn list_packages() -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: packages::PACKAGES,
    }))
}

// ---------------------------------------------------------------------------
// POST /packages/subscribe
// ---------------------------------------------------------------------------

/// Request body for `POST /packages/subscribe`.
#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub package_id: String,
}

/// Subscribe the authenticated dealer to a package.
///
/// Payment capture happens outside this system; subscribing records intent
/// and advances the `plan` onboarding step.
pub async fn subscribe(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SubscribeRequest>,
) -> AppResult<impl IntoResponse> {
    let package = packages::find_package(&input.package_id)
        .ok_or_else(|| AppError::NotFound(format!("Unknown package '{}'", input.package_id)))?;

    tracing::info!(user_id = auth.user_id, package = package.id, "Package subscription");

    triggers::advance_step(&state.pool, auth.user_id, StepKey::Plan).await;

    Ok(Json(DataResponse { data: package }))
}
