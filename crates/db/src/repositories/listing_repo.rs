//! Repository for the `listings` table.

use matjar_core::types::DbId;
use sqlx::PgPool;

use crate::models::listing::{CreateListing, Listing, ListingFilter, UpdateListing};

/// Column list for `listings` queries.
const COLUMNS: &str = "id, dealer_id, site_id, listing_type, title, description, \
    price, currency, status, license_status, city, category, is_published, \
    data, created_at, updated_at";

/// Upper bound for page sizes; larger requests are clamped.
const MAX_LIMIT: i64 = 100;
/// Default page size when the caller does not pass `limit`.
const DEFAULT_LIMIT: i64 = 10;

/// Provides dealer-scoped CRUD for listings.
pub struct ListingRepo;

impl ListingRepo {
    /// Insert a new listing for a dealer, returning the created row.
    pub async fn create(
        pool: &PgPool,
        dealer_id: DbId,
        input: &CreateListing,
    ) -> Result<Listing, sqlx::Error> {
        let query = format!(
            "INSERT INTO listings
                (dealer_id, site_id, listing_type, title, description, price,
                 currency, status, license_status, city, category, is_published, data)
             VALUES ($1, $2, $3, $4, $5, $6,
                     COALESCE($7, 'SAR'), COALESCE($8, 'draft'), COALESCE($9, 'pending'),
                     $10, $11, COALESCE($12, FALSE), COALESCE($13, '{{}}'::jsonb))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Listing>(&query)
            .bind(dealer_id)
            .bind(input.site_id)
            .bind(&input.listing_type)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.currency)
            .bind(&input.status)
            .bind(&input.license_status)
            .bind(&input.city)
            .bind(&input.category)
            .bind(input.is_published)
            .bind(&input.data)
            .fetch_one(pool)
            .await
    }

    /// Find a listing by id, scoped to its owning dealer.
    pub async fn find_for_dealer(
        pool: &PgPool,
        id: DbId,
        dealer_id: DbId,
    ) -> Result<Option<Listing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM listings WHERE id = $1 AND dealer_id = $2");
        sqlx::query_as::<_, Listing>(&query)
            .bind(id)
            .bind(dealer_id)
            .fetch_optional(pool)
            .await
    }

    /// Filtered, paginated index of one dealer's listings, newest first.
    ///
    /// Returns the page plus the total row count for the filter.
    pub async fn list_for_dealer(
        pool: &PgPool,
        dealer_id: DbId,
        filter: &ListingFilter,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<(Vec<Listing>, i64), sqlx::Error> {
        let mut conditions: Vec<String> = vec!["dealer_id = $1".to_string()];
        let mut param_idx: usize = 2;

        if filter.status.is_some() {
            conditions.push(format!("status = ${param_idx}"));
            param_idx += 1;
        }
        if filter.listing_type.is_some() {
            conditions.push(format!("listing_type = ${param_idx}"));
            param_idx += 1;
        }
        if filter.city.is_some() {
            conditions.push(format!("city ILIKE ${param_idx}"));
            param_idx += 1;
        }
        if filter.search.is_some() {
            conditions.push(format!(
                "(title ILIKE ${param_idx} OR description ILIKE ${param_idx})"
            ));
            param_idx += 1;
        }

        let where_clause = conditions.join(" AND ");
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = offset.unwrap_or(0).max(0);

        let list_query = format!(
            "SELECT {COLUMNS} FROM listings
             WHERE {where_clause}
             ORDER BY created_at DESC
             LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );
        let count_query = format!("SELECT COUNT(*) FROM listings WHERE {where_clause}");

        let mut list_q = sqlx::query_as::<_, Listing>(&list_query).bind(dealer_id);
        let mut count_q = sqlx::query_as::<_, (i64,)>(&count_query).bind(dealer_id);

        if let Some(ref status) = filter.status {
            list_q = list_q.bind(status);
            count_q = count_q.bind(status);
        }
        if let Some(ref listing_type) = filter.listing_type {
            list_q = list_q.bind(listing_type);
            count_q = count_q.bind(listing_type);
        }
        if let Some(ref city) = filter.city {
            let pattern = format!("%{city}%");
            list_q = list_q.bind(pattern.clone());
            count_q = count_q.bind(pattern);
        }
        if let Some(ref search) = filter.search {
            let pattern = format!("%{search}%");
            list_q = list_q.bind(pattern.clone());
            count_q = count_q.bind(pattern);
        }

        let rows = list_q.bind(limit).bind(offset).fetch_all(pool).await?;
        let (total,) = count_q.fetch_one(pool).await?;

        Ok((rows, total))
    }

    /// Partial update of a dealer's listing. Only non-`None` fields apply.
    ///
    /// Returns `None` when the listing does not exist or belongs to another
    /// dealer.
    pub async fn update_for_dealer(
        pool: &PgPool,
        id: DbId,
        dealer_id: DbId,
        input: &UpdateListing,
    ) -> Result<Option<Listing>, sqlx::Error> {
        let query = format!(
            "UPDATE listings SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                price = COALESCE($5, price),
                currency = COALESCE($6, currency),
                status = COALESCE($7, status),
                city = COALESCE($8, city),
                category = COALESCE($9, category),
                is_published = COALESCE($10, is_published),
                data = CASE WHEN $11::jsonb IS NULL THEN data ELSE data || $11::jsonb END,
                updated_at = NOW()
             WHERE id = $1 AND dealer_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Listing>(&query)
            .bind(id)
            .bind(dealer_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.currency)
            .bind(&input.status)
            .bind(&input.city)
            .bind(&input.category)
            .bind(input.is_published)
            .bind(&input.data)
            .fetch_optional(pool)
            .await
    }

    /// Delete a dealer's listing. Returns `true` if a row was removed.
    pub async fn delete_for_dealer(
        pool: &PgPool,
        id: DbId,
        dealer_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM listings WHERE id = $1 AND dealer_id = $2")
            .bind(id)
            .bind(dealer_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether the dealer has at least one listing.
    pub async fn any_for_dealer(pool: &PgPool, dealer_id: DbId) -> Result<bool, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM listings WHERE dealer_id = $1")
                .bind(dealer_id)
                .fetch_one(pool)
                .await?;
        Ok(count > 0)
    }
}
