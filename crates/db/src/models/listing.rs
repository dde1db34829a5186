//! Listing model and DTOs.

use matjar_core::types::{DbId, SarAmount, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A listing row from the `listings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Listing {
    pub id: DbId,
    pub dealer_id: DbId,
    pub site_id: Option<DbId>,
    /// `"car"` or `"property"`.
    pub listing_type: String,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<SarAmount>,
    pub currency: String,
    pub status: String,
    pub license_status: String,
    pub city: Option<String>,
    pub category: Option<String>,
    pub is_published: bool,
    /// Sector-specific attributes (specs, location, media, contact, ...).
    pub data: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a listing.
#[derive(Debug, Deserialize)]
pub struct CreateListing {
    #[serde(default = "default_listing_type")]
    pub listing_type: String,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<SarAmount>,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub license_status: Option<String>,
    pub city: Option<String>,
    pub category: Option<String>,
    pub is_published: Option<bool>,
    pub site_id: Option<DbId>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

fn default_listing_type() -> String {
    "property".to_string()
}

/// DTO for partial listing updates. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateListing {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<SarAmount>,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub city: Option<String>,
    pub category: Option<String>,
    pub is_published: Option<bool>,
    pub data: Option<serde_json::Value>,
}

/// Filters accepted by the dealer-scoped listing index.
#[derive(Debug, Default, Deserialize)]
pub struct ListingFilter {
    pub status: Option<String>,
    pub listing_type: Option<String>,
    pub city: Option<String>,
    pub search: Option<String>,
}
