//! Repository for the `otp_codes` table.

use matjar_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::otp::OtpCode;

/// Column list for `otp_codes` queries.
const COLUMNS: &str = "id, phone, code, expires_at, used, created_at";

/// Issue and redeem one-time login codes.
pub struct OtpRepo;

impl OtpRepo {
    /// Store a freshly generated code for a phone number.
    pub async fn create(
        pool: &PgPool,
        phone: &str,
        code: &str,
        expires_at: Timestamp,
    ) -> Result<OtpCode, sqlx::Error> {
        let query = format!(
            "INSERT INTO otp_codes (phone, code, expires_at, used)
             VALUES ($1, $2, $3, FALSE)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OtpCode>(&query)
            .bind(phone)
            .bind(code)
            .bind(expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find the newest unused, unexpired code matching (phone, code).
    pub async fn find_valid(
        pool: &PgPool,
        phone: &str,
        code: &str,
    ) -> Result<Option<OtpCode>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM otp_codes
             WHERE phone = $1 AND code = $2 AND used = FALSE AND expires_at > NOW()
             ORDER BY created_at DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, OtpCode>(&query)
            .bind(phone)
            .bind(code)
            .fetch_optional(pool)
            .await
    }

    /// Burn a code after successful verification.
    pub async fn mark_used(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE otp_codes SET used = TRUE WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Invalidate every outstanding code for a phone (called before issuing
    /// a new one, so at most one code is redeemable at a time).
    pub async fn invalidate_for_phone(pool: &PgPool, phone: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE otp_codes SET used = TRUE WHERE phone = $1 AND used = FALSE")
            .bind(phone)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
