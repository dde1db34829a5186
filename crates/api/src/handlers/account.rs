//! Handlers for the authenticated dealer's own account.
//!
//! Profile reads/updates plus the local verification callbacks. The
//! outbound identity/license verification relays live outside this
//! service; these endpoints record the outcome and advance onboarding.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use matjar_core::error::CoreError;
use matjar_core::onboarding::StepKey;
use matjar_core::phone;
use matjar_core::sectors::Sector;
use matjar_db::models::user::{UpdateProfile, User, VerificationFlag};
use matjar_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

use super::triggers;

/// Verification flags block embedded in account responses.
#[derive(Debug, Serialize)]
pub struct Verifications {
    pub nafath: bool,
    pub real_estate_license: bool,
    pub car_license: bool,
}

impl From<&User> for Verifications {
    fn from(user: &User) -> Self {
        Verifications {
            nafath: user.nafath_verified,
            real_estate_license: user.real_estate_license_verified,
            car_license: user.car_license_verified,
        }
    }
}

fn user_not_found(id: matjar_core::types::DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "user", id })
}

// ---------------------------------------------------------------------------
// GET /account/profile
// ---------------------------------------------------------------------------

/// The authenticated dealer's profile with verification flags.
pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| user_not_found(auth.user_id))?;

    Ok(Json(DataResponse { data: user }))
}

// ---------------------------------------------------------------------------
// PUT /account/profile
// ---------------------------------------------------------------------------

/// Partial profile update. Counts as the `basic_info` onboarding milestone.
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<UpdateProfile>,
) -> AppResult<impl IntoResponse> {
    if input.is_empty() {
        return Err(AppError::BadRequest("No fields to update".into()));
    }

    if let Some(ref p) = input.phone {
        input.phone = Some(phone::normalize(p));
    }

    let user = UserRepo::update_profile(&state.pool, auth.user_id, &input)
        .await?
        .ok_or_else(|| user_not_found(auth.user_id))?;

    tracing::info!(user_id = user.id, "Profile updated");

    triggers::advance_step(&state.pool, auth.user_id, StepKey::BasicInfo).await;

    Ok(Json(DataResponse { data: user }))
}

// ---------------------------------------------------------------------------
// POST /account/verifications/nafath
// ---------------------------------------------------------------------------

/// Record a successful national-identity verification.
pub async fn verify_nafath(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::set_verified(&state.pool, auth.user_id, VerificationFlag::Nafath)
        .await?
        .ok_or_else(|| user_not_found(auth.user_id))?;

    tracing::info!(user_id = user.id, "Nafath verification recorded");

    triggers::advance_step(&state.pool, auth.user_id, StepKey::Nafath).await;

    Ok(Json(DataResponse {
        data: Verifications::from(&user),
    }))
}

// ---------------------------------------------------------------------------
// POST /account/verifications/license
// ---------------------------------------------------------------------------

/// Record a successful FAAL license verification for the dealer's sector.
pub async fn verify_license(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| user_not_found(auth.user_id))?;

    let flag = match user.sector {
        Sector::Cars => VerificationFlag::CarLicense,
        Sector::Realestate => VerificationFlag::RealEstateLicense,
    };

    let user = UserRepo::set_verified(&state.pool, auth.user_id, flag)
        .await?
        .ok_or_else(|| user_not_found(auth.user_id))?;

    tracing::info!(user_id = user.id, sector = %user.sector, "License verification recorded");

    triggers::advance_step(&state.pool, auth.user_id, StepKey::FaalLicense).await;

    Ok(Json(DataResponse {
        data: Verifications::from(&user),
    }))
}
