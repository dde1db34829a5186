//! Repository for the `sites` table.

use matjar_core::sectors::Sector;
use matjar_core::types::DbId;
use sqlx::PgPool;

use crate::models::site::{Site, UpsertSite};

/// Column list for `sites` queries.
const COLUMNS: &str = "id, owner_id, sector, slug, name, template_key, \
    theme, settings, is_published, created_at, updated_at";

/// Provides storefront lookup and upsert operations.
pub struct SiteRepo;

impl SiteRepo {
    /// Upsert a dealer's storefront for one sector.
    ///
    /// Inserts on first save; subsequent saves update the row in place and
    /// merge `theme`/`settings` with the stored JSONB (client sends only
    /// the blocks it changed). `uq_sites_slug` rejects slugs taken by
    /// another storefront.
    pub async fn upsert_for_owner(
        pool: &PgPool,
        owner_id: DbId,
        input: &UpsertSite,
    ) -> Result<Site, sqlx::Error> {
        let query = format!(
            "INSERT INTO sites (owner_id, sector, slug, name, template_key, theme, settings, is_published)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, '{{}}'::jsonb), COALESCE($7, '{{}}'::jsonb), COALESCE($8, FALSE))
             ON CONFLICT (owner_id, sector) DO UPDATE SET
                 slug = EXCLUDED.slug,
                 name = EXCLUDED.name,
                 template_key = EXCLUDED.template_key,
                 theme = sites.theme || COALESCE($6, '{{}}'::jsonb),
                 settings = sites.settings || COALESCE($7, '{{}}'::jsonb),
                 is_published = COALESCE($8, sites.is_published),
                 updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Site>(&query)
            .bind(owner_id)
            .bind(input.sector.as_str())
            .bind(&input.slug)
            .bind(&input.name)
            .bind(&input.template_key)
            .bind(&input.theme)
            .bind(&input.settings)
            .bind(input.is_published)
            .fetch_one(pool)
            .await
    }

    /// The dealer's storefront for one sector, if configured.
    pub async fn find_by_owner_sector(
        pool: &PgPool,
        owner_id: DbId,
        sector: Sector,
    ) -> Result<Option<Site>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sites WHERE owner_id = $1 AND sector = $2");
        sqlx::query_as::<_, Site>(&query)
            .bind(owner_id)
            .bind(sector.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Public storefront lookup by slug. Only published sites are visible.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Site>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sites WHERE slug = $1 AND is_published = TRUE"
        );
        sqlx::query_as::<_, Site>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }
}
