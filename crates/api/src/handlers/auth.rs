//! Handlers for the `/auth` resource: phone-OTP login, profile completion,
//! refresh-token rotation, and logout.
//!
//! There are no passwords. A client requests a one-time code for a phone
//! number, verifies it, and either receives tokens (known phone) or is told
//! to complete a profile first. Profile completion creates the account and
//! seeds the onboarding checklist in the same request.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

use matjar_core::error::CoreError;
use matjar_core::phone;
use matjar_core::sectors::{AccountType, Sector};
use matjar_db::models::session::CreateSession;
use matjar_db::models::user::{CreateUser, User};
use matjar_db::repositories::{OnboardingRepo, OtpRepo, SessionRepo, UserRepo};

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/otp/request`.
#[derive(Debug, Deserialize)]
pub struct RequestOtpRequest {
    pub phone: String,
}

/// Response body for `POST /auth/otp/request`.
#[derive(Debug, Serialize)]
pub struct OtpRequested {
    /// The normalized phone the code was issued for.
    pub phone: String,
    /// Code lifetime in seconds.
    pub expires_in: i64,
}

/// Request body for `POST /auth/otp/verify`.
#[derive(Debug, Deserialize)]
pub struct VerifyOtpRequest {
    pub phone: String,
    pub code: String,
}

/// Response body for `POST /auth/otp/verify`.
///
/// `auth` is present only for `status: "existing"`; a `"new"` phone has no
/// account yet and the client proceeds to `/auth/complete-profile`.
#[derive(Debug, Serialize)]
pub struct VerifyOtpResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthResponse>,
}

/// Request body for `POST /auth/complete-profile`.
#[derive(Debug, Deserialize)]
pub struct CompleteProfileRequest {
    pub phone: String,
    pub sector: Sector,
    pub account_type: AccountType,
    pub full_name: String,
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub city: String,
}

/// Request body for `POST /auth/refresh` and `POST /auth/logout`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful authentication payload returned by verify, complete-profile,
/// and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: User,
}

/// Response body for `POST /auth/logout`.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub revoked: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/otp/request
///
/// Issue a one-time code for a phone number. Any outstanding codes for the
/// same phone are invalidated first, so at most one code is redeemable.
///
/// SMS delivery is handled by an external provider outside this service;
/// the code is only logged here (debug level) for local development.
pub async fn request_otp(
    State(state): State<AppState>,
    Json(input): Json<RequestOtpRequest>,
) -> AppResult<impl IntoResponse> {
    if input.phone.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Phone number is required".into(),
        )));
    }

    let phone = phone::normalize(&input.phone);
    let code = generate_otp_code();
    let expires_at = Utc::now() + chrono::Duration::minutes(state.config.otp_expiry_mins);

    OtpRepo::invalidate_for_phone(&state.pool, &phone).await?;
    OtpRepo::create(&state.pool, &phone, &code, expires_at).await?;

    tracing::info!(%phone, "OTP code issued");
    tracing::debug!(%phone, %code, "OTP code (local development only)");

    Ok(Json(DataResponse {
        data: OtpRequested {
            phone,
            expires_in: state.config.otp_expiry_mins * 60,
        },
    }))
}

/// POST /api/v1/auth/otp/verify
///
/// Redeem a one-time code. A known phone gets tokens; an unknown phone gets
/// `status: "new"` and proceeds to profile completion.
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(input): Json<VerifyOtpRequest>,
) -> AppResult<Json<DataResponse<VerifyOtpResponse>>> {
    let phone = phone::normalize(&input.phone);
    let code = input.code.trim();

    let otp = OtpRepo::find_valid(&state.pool, &phone, code)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired code".into()))
        })?;

    OtpRepo::mark_used(&state.pool, otp.id).await?;

    let Some(user) = UserRepo::find_by_phone(&state.pool, &phone).await? else {
        tracing::info!(%phone, "OTP verified for new phone, awaiting profile");
        return Ok(Json(DataResponse {
            data: VerifyOtpResponse {
                status: "new",
                auth: None,
            },
        }));
    };

    let auth = create_auth_response(&state, user).await?;
    tracing::info!(user_id = auth.user.id, "OTP login");

    Ok(Json(DataResponse {
        data: VerifyOtpResponse {
            status: "existing",
            auth: Some(auth),
        },
    }))
}

/// POST /api/v1/auth/complete-profile
///
/// Create the dealer account for a phone that verified as `"new"`, seed the
/// onboarding checklist, and return tokens. Retrying after a partial
/// failure is safe: checklist seeding is idempotent and a duplicate phone
/// is rejected with 409.
pub async fn complete_profile(
    State(state): State<AppState>,
    Json(input): Json<CompleteProfileRequest>,
) -> AppResult<impl IntoResponse> {
    if input.full_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Full name is required".into(),
        )));
    }
    if input.city.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "City is required".into(),
        )));
    }

    let phone = phone::normalize(&input.phone);

    if UserRepo::find_by_phone(&state.pool, &phone).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "An account already exists for this phone".into(),
        )));
    }

    // Company name only makes sense for company accounts.
    let company_name = match input.account_type {
        AccountType::Company => input.company_name.clone(),
        AccountType::Individual => None,
    };

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            phone,
            full_name: input.full_name.trim().to_string(),
            account_type: input.account_type,
            sector: input.sector,
            company_name,
            email: input.email.clone(),
            city: input.city.trim().to_string(),
        },
    )
    .await?;

    // Seed the onboarding checklist for the new account.
    OnboardingRepo::initialize(&state.pool, user.id).await?;

    tracing::info!(user_id = user.id, sector = %user.sector, "Account created");

    let auth = create_auth_response(&state, user).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: auth })))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for new access + refresh tokens. The
/// presented session is revoked (token rotation).
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<DataResponse<AuthResponse>>> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    // Rotation: the old session is dead as soon as it is presented.
    SessionRepo::revoke(&state.pool, session.id).await?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let auth = create_auth_response(&state, user).await?;

    Ok(Json(DataResponse { data: auth }))
}

/// POST /api/v1/auth/logout
///
/// Revoke the presented refresh session. Succeeds even when the token is
/// already invalid -- logout must never fail the client.
pub async fn logout(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<DataResponse<LogoutResponse>>> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let revoked = match SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash).await? {
        Some(session) => SessionRepo::revoke(&state.pool, session.id).await?,
        None => false,
    };

    Ok(Json(DataResponse {
        data: LogoutResponse { revoked },
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Random 6-digit one-time code.
fn generate_otp_code() -> String {
    let mut rng = rand::rng();
    format!("{:06}", rng.random_range(0..1_000_000u32))
}

/// Mint an access + refresh token pair and persist the refresh session.
async fn create_auth_response(state: &AppState, user: User) -> Result<AuthResponse, AppError> {
    let access_token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_token, refresh_hash) = generate_refresh_token();
    let expires_at =
        Utc::now() + chrono::Duration::days(state.config.jwt.refresh_token_expiry_days);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: refresh_hash,
            expires_at,
            user_agent: None,
            ip_address: None,
        },
    )
    .await?;

    Ok(AuthResponse {
        access_token,
        refresh_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn otp_codes_are_six_digits() {
        for _ in 0..100 {
            let code = generate_otp_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
