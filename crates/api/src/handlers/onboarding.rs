//! Handlers for the dealer onboarding checklist.
//!
//! The checklist is seeded at profile completion (`handlers::auth`) and
//! advanced either directly through these endpoints or as a side effect of
//! business actions (`handlers::triggers`). Both paths share the same
//! engine, [`OnboardingRepo::complete_step`].

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use matjar_core::onboarding::StepKey;
use matjar_db::repositories::OnboardingRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /user/onboarding
// ---------------------------------------------------------------------------

/// Get the authenticated user's checklist, ordered by step.
///
/// Users created before onboarding existed have no rows; the response is
/// then an empty list, not an error.
pub async fn get_onboarding(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let steps = OnboardingRepo::get_all(&state.pool, auth.user_id).await?;

    tracing::debug!(user_id = auth.user_id, "Fetched onboarding checklist");

    Ok(Json(DataResponse { data: steps }))
}

// ---------------------------------------------------------------------------
// POST /user/onboarding/steps/{step_key}/complete
// ---------------------------------------------------------------------------

/// Mark a step done and return the full updated checklist.
///
/// Identical semantics to the indirect trigger path: completing an
/// already-done step is an idempotent no-op, and any pending step may be
/// completed out of order. Unknown step keys and uninitialized users both
/// get a 404.
pub async fn complete_step(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(step_key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let key: StepKey = step_key
        .parse()
        .map_err(|_| step_not_found(&step_key))?;

    let steps = OnboardingRepo::complete_step(&state.pool, auth.user_id, key)
        .await?
        .ok_or_else(|| step_not_found(&step_key))?;

    tracing::info!(user_id = auth.user_id, step = %key, "Onboarding step completed");

    Ok(Json(DataResponse { data: steps }))
}

/// Both out-of-catalog keys and uninitialized users surface the same way.
fn step_not_found(step_key: &str) -> AppError {
    AppError::NotFound(format!(
        "Onboarding step '{step_key}' does not exist for this user"
    ))
}
