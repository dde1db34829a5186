//! Role name catalog.
//!
//! Roles are stored as plain text on the `users` table and embedded in JWT
//! claims. Dealers are the default; `admin` is reserved for platform staff.

use crate::error::CoreError;

/// Regular marketplace dealer (default role at signup).
pub const ROLE_DEALER: &str = "dealer";
/// Platform staff.
pub const ROLE_ADMIN: &str = "admin";

/// All valid role names.
pub const VALID_ROLES: &[&str] = &[ROLE_DEALER, ROLE_ADMIN];

/// Validate that a role name is one of the known roles.
pub fn validate_role(role: &str) -> Result<(), CoreError> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid role '{role}'. Must be one of: {VALID_ROLES:?}"
        )))
    }
}
