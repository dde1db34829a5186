//! One-time login code model.

use matjar_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An OTP row from the `otp_codes` table.
#[derive(Debug, Clone, FromRow)]
pub struct OtpCode {
    pub id: DbId,
    pub phone: String,
    pub code: String,
    pub expires_at: Timestamp,
    pub used: bool,
    pub created_at: Timestamp,
}
