//! Handlers for branded storefronts.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use matjar_core::onboarding::StepKey;
use matjar_core::sectors::Sector;
use matjar_core::sites;
use matjar_db::models::site::UpsertSite;
use matjar_db::repositories::SiteRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

use super::triggers;

/// Query parameters for `GET /site`.
#[derive(Debug, Deserialize)]
pub struct SiteQuery {
    pub sector: Sector,
}

// ---------------------------------------------------------------------------
// GET /site?sector=
// ---------------------------------------------------------------------------

/// The dealer's storefront for one sector; `null` when not yet configured.
pub async fn get_my_site(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<SiteQuery>,
) -> AppResult<impl IntoResponse> {
    let site = SiteRepo::find_by_owner_sector(&state.pool, auth.user_id, query.sector).await?;

    Ok(Json(DataResponse { data: site }))
}

// ---------------------------------------------------------------------------
// PUT /site
// ---------------------------------------------------------------------------

/// Create or update the dealer's storefront for a sector.
///
/// Counts as the `site_setup` onboarding milestone, and additionally as
/// `publish_site` when the saved storefront is published.
pub async fn upsert_my_site(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpsertSite>,
) -> AppResult<impl IntoResponse> {
    sites::validate_template_key(&input.template_key).map_err(AppError::Core)?;
    sites::validate_slug(&input.slug).map_err(AppError::Core)?;

    let site = SiteRepo::upsert_for_owner(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        site_id = site.id,
        sector = %site.sector,
        published = site.is_published,
        "Storefront saved"
    );

    triggers::advance_step(&state.pool, auth.user_id, StepKey::SiteSetup).await;
    if site.is_published {
        triggers::advance_step(&state.pool, auth.user_id, StepKey::PublishSite).await;
    }

    Ok(Json(DataResponse { data: site }))
}

// ---------------------------------------------------------------------------
// GET /sites/{slug}
// ---------------------------------------------------------------------------

/// Public storefront read. Only published sites are visible.
pub async fn get_public_site(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let site = SiteRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No published site at '{slug}'")))?;

    Ok(Json(DataResponse { data: site }))
}
