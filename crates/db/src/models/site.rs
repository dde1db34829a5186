//! Storefront model and DTOs.

use matjar_core::sectors::Sector;
use matjar_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A storefront row from the `sites` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Site {
    pub id: DbId,
    pub owner_id: DbId,
    #[sqlx(try_from = "String")]
    pub sector: Sector,
    pub slug: String,
    pub name: Option<String>,
    pub template_key: String,
    /// Colors/fonts, free-form per template.
    pub theme: serde_json::Value,
    /// Branding/social/location/about blocks, free-form per template.
    pub settings: serde_json::Value,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting a dealer's storefront (keyed by owner + sector).
#[derive(Debug, Deserialize)]
pub struct UpsertSite {
    pub sector: Sector,
    pub slug: String,
    pub name: Option<String>,
    pub template_key: String,
    #[serde(default)]
    pub theme: Option<serde_json::Value>,
    #[serde(default)]
    pub settings: Option<serde_json::Value>,
    #[serde(default)]
    pub is_published: Option<bool>,
}
