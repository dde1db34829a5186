//! Repository for the `users` table.

use matjar_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateProfile, User, VerificationFlag};

/// Column list for `users` queries.
const COLUMNS: &str = "\
    id, phone, full_name, account_type, sector, company_name, email, city, \
    role, nafath_verified, real_estate_license_verified, car_license_verified, \
    created_at, updated_at";

/// Provides account lookup and mutation operations.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new dealer account, returning the created row.
    ///
    /// The phone must already be normalized; `uq_users_phone` rejects
    /// duplicates (surfaced as a 409 by the API error classifier).
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (phone, full_name, account_type, sector, company_name, email, city)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.phone)
            .bind(&input.full_name)
            .bind(input.account_type.as_str())
            .bind(input.sector.as_str())
            .bind(&input.company_name)
            .bind(&input.email)
            .bind(&input.city)
            .fetch_one(pool)
            .await
    }

    /// Find a user by primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by normalized phone number.
    pub async fn find_by_phone(pool: &PgPool, phone: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE phone = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(phone)
            .fetch_optional(pool)
            .await
    }

    /// Partial profile update. Only non-`None` fields are applied.
    ///
    /// Returns `None` when the patch is empty or no row matched.
    pub async fn update_profile(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<User>, sqlx::Error> {
        let mut set_clauses: Vec<String> = Vec::new();
        let mut param_idx: usize = 2; // $1 is the user id

        for (field, present) in [
            ("full_name", input.full_name.is_some()),
            ("company_name", input.company_name.is_some()),
            ("city", input.city.is_some()),
            ("email", input.email.is_some()),
            ("phone", input.phone.is_some()),
        ] {
            if present {
                set_clauses.push(format!("{field} = ${param_idx}"));
                param_idx += 1;
            }
        }

        if set_clauses.is_empty() {
            return Ok(None);
        }

        let query = format!(
            "UPDATE users SET {}, updated_at = NOW() WHERE id = $1 RETURNING {COLUMNS}",
            set_clauses.join(", ")
        );

        let mut q = sqlx::query_as::<_, User>(&query).bind(id);
        if let Some(ref v) = input.full_name {
            q = q.bind(v);
        }
        if let Some(ref v) = input.company_name {
            q = q.bind(v);
        }
        if let Some(ref v) = input.city {
            q = q.bind(v);
        }
        if let Some(ref v) = input.email {
            q = q.bind(v);
        }
        if let Some(ref v) = input.phone {
            q = q.bind(v);
        }

        q.fetch_optional(pool).await
    }

    /// Set one verification flag to true, returning the updated row.
    pub async fn set_verified(
        pool: &PgPool,
        id: DbId,
        flag: VerificationFlag,
    ) -> Result<Option<User>, sqlx::Error> {
        // Column name comes from the closed VerificationFlag enum.
        let query = format!(
            "UPDATE users SET {} = TRUE, updated_at = NOW() WHERE id = $1 RETURNING {COLUMNS}",
            flag.column()
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
