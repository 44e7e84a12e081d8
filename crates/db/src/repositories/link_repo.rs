//! Repository for the `links` table.

use agendo_core::types::DbId;
use sqlx::PgPool;

use crate::models::link::{CreateLink, Link, UpdateLink};

const COLUMNS: &str = "id, user_id, title, url, description, created_at, updated_at";

/// Provides tenant-scoped CRUD operations for links.
pub struct LinkRepo;

impl LinkRepo {
    /// List links, newest first. `user_id = None` lists across all
    /// tenants (master keys only).
    pub async fn list(
        pool: &PgPool,
        user_id: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Link>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM links \
             WHERE ($1::TEXT IS NULL OR user_id = $1) \
             ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Link>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count links matching the same filter as [`Self::list`].
    pub async fn count(pool: &PgPool, user_id: Option<&str>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM links WHERE ($1::TEXT IS NULL OR user_id = $1)")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// All of a tenant's links, newest first (profile document assembly).
    pub async fn list_all(pool: &PgPool, user_id: &str) -> Result<Vec<Link>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM links WHERE user_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Link>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Create a link for a tenant.
    pub async fn create(
        pool: &PgPool,
        user_id: &str,
        input: &CreateLink,
    ) -> Result<Link, sqlx::Error> {
        let query = format!(
            "INSERT INTO links (user_id, title, url, description) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Link>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.url)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Update a link. Returns `None` when the row does not exist for this
    /// tenant.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: &str,
        input: &UpdateLink,
    ) -> Result<Option<Link>, sqlx::Error> {
        let query = format!(
            "UPDATE links SET \
                 title = COALESCE($3, title), \
                 url = COALESCE($4, url), \
                 description = COALESCE($5, description), \
                 updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Link>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.url)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a link. Returns `false` when the row does not exist for
    /// this tenant.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM links WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
