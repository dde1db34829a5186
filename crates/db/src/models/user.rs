//! Dealer account model and DTOs.

use matjar_core::sectors::{AccountType, Sector};
use matjar_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub phone: String,
    pub full_name: String,
    #[sqlx(try_from = "String")]
    pub account_type: AccountType,
    #[sqlx(try_from = "String")]
    pub sector: Sector,
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub city: String,
    /// Role name (`"dealer"` or `"admin"`); also embedded in JWT claims.
    pub role: String,
    pub nafath_verified: bool,
    pub real_estate_license_verified: bool,
    pub car_license_verified: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user at profile completion.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub phone: String,
    pub full_name: String,
    pub account_type: AccountType,
    pub sector: Sector,
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub city: String,
}

/// DTO for partial profile updates. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateProfile {
    pub full_name: Option<String>,
    pub company_name: Option<String>,
    pub city: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UpdateProfile {
    /// Whether the patch carries at least one field.
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.company_name.is_none()
            && self.city.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }
}

/// Which verification flag to flip on a user.
#[derive(Debug, Clone, Copy)]
pub enum VerificationFlag {
    Nafath,
    RealEstateLicense,
    CarLicense,
}

impl VerificationFlag {
    /// Column backing this flag.
    pub fn column(self) -> &'static str {
        match self {
            VerificationFlag::Nafath => "nafath_verified",
            VerificationFlag::RealEstateLicense => "real_estate_license_verified",
            VerificationFlag::CarLicense => "car_license_verified",
        }
    }
}
