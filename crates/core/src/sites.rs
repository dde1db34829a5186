//! Storefront template catalog and slug validation.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Template keys
// ---------------------------------------------------------------------------

pub const TEMPLATE_CAR_CLASSIC: &str = "car_classic";
pub const TEMPLATE_CAR_MODERN: &str = "car_modern";
pub const TEMPLATE_CAR_LUXURY: &str = "car_luxury";
pub const TEMPLATE_REALESTATE_CLASSIC: &str = "realestate_classic";
pub const TEMPLATE_REALESTATE_MODERN: &str = "realestate_modern";
pub const TEMPLATE_REALESTATE_LUXURY: &str = "realestate_luxury";

/// All valid storefront template keys.
pub const VALID_TEMPLATES: &[&str] = &[
    TEMPLATE_CAR_CLASSIC,
    TEMPLATE_CAR_MODERN,
    TEMPLATE_CAR_LUXURY,
    TEMPLATE_REALESTATE_CLASSIC,
    TEMPLATE_REALESTATE_MODERN,
    TEMPLATE_REALESTATE_LUXURY,
];

/// Validate that a template key is one of the known templates.
pub fn validate_template_key(key: &str) -> Result<(), CoreError> {
    if VALID_TEMPLATES.contains(&key) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid template_key '{key}'. Must be one of: {VALID_TEMPLATES:?}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Slugs
// ---------------------------------------------------------------------------

/// Slug length bounds (subdomain-safe).
const SLUG_MIN_LEN: usize = 3;
const SLUG_MAX_LEN: usize = 63;

fn slug_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug regex is valid"))
}

/// Validate a storefront slug: lowercase alphanumeric segments separated by
/// single hyphens, 3..=63 characters.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.len() < SLUG_MIN_LEN || slug.len() > SLUG_MAX_LEN {
        return Err(CoreError::Validation(format!(
            "Slug must be between {SLUG_MIN_LEN} and {SLUG_MAX_LEN} characters"
        )));
    }
    if !slug_regex().is_match(slug) {
        return Err(CoreError::Validation(
            "Slug may only contain lowercase letters, digits, and hyphens".to_string(),
        ));
    }
    Ok(())
}
