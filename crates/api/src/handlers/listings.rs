//! Handlers for dealer listings.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use matjar_core::error::CoreError;
use matjar_core::onboarding::StepKey;
use matjar_core::types::DbId;
use matjar_db::models::listing::{CreateListing, ListingFilter, UpdateListing};
use matjar_db::repositories::ListingRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

use super::triggers;

/// Listing kinds a dealer may create.
const VALID_LISTING_TYPES: &[&str] = &["car", "property"];

fn listing_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "listing",
        id,
    })
}

// ---------------------------------------------------------------------------
// GET /listings
// ---------------------------------------------------------------------------

/// Filtered, paginated index of the dealer's own listings, newest first.
pub async fn list_listings(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<ListingFilter>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<impl IntoResponse> {
    let (listings, total) = ListingRepo::list_for_dealer(
        &state.pool,
        auth.user_id,
        &filter,
        pagination.limit,
        pagination.offset,
    )
    .await?;

    Ok(Json(PageResponse {
        data: listings,
        total,
    }))
}

// ---------------------------------------------------------------------------
// POST /listings
// ---------------------------------------------------------------------------

/// Create a listing. Counts as the `first_listing` onboarding milestone.
pub async fn create_listing(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateListing>,
) -> AppResult<impl IntoResponse> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title is required".into(),
        )));
    }
    if !VALID_LISTING_TYPES.contains(&input.listing_type.as_str()) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid listing_type '{}'. Must be one of: {VALID_LISTING_TYPES:?}",
            input.listing_type
        ))));
    }

    let listing = ListingRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        listing_id = listing.id,
        listing_type = %listing.listing_type,
        "Listing created"
    );

    triggers::advance_step(&state.pool, auth.user_id, StepKey::FirstListing).await;

    Ok((StatusCode::CREATED, Json(DataResponse { data: listing })))
}

// ---------------------------------------------------------------------------
// GET /listings/{id}
// ---------------------------------------------------------------------------

/// Fetch one of the dealer's listings.
pub async fn get_listing(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let listing = ListingRepo::find_for_dealer(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| listing_not_found(id))?;

    Ok(Json(DataResponse { data: listing }))
}

// ---------------------------------------------------------------------------
// PUT /listings/{id}
// ---------------------------------------------------------------------------

/// Partial update of one of the dealer's listings.
pub async fn update_listing(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateListing>,
) -> AppResult<impl IntoResponse> {
    let listing = ListingRepo::update_for_dealer(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or_else(|| listing_not_found(id))?;

    tracing::info!(user_id = auth.user_id, listing_id = id, "Listing updated");

    Ok(Json(DataResponse { data: listing }))
}

// ---------------------------------------------------------------------------
// DELETE /listings/{id}
// ---------------------------------------------------------------------------

/// Delete one of the dealer's listings.
pub async fn delete_listing(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ListingRepo::delete_for_dealer(&state.pool, id, auth.user_id).await?;
    if !deleted {
        return Err(listing_not_found(id));
    }

    tracing::info!(user_id = auth.user_id, listing_id = id, "Listing deleted");

    Ok(StatusCode::NO_CONTENT)
}
