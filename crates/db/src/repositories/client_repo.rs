//! Repository for the `clients` table.

use agendo_core::types::DbId;
use sqlx::PgPool;

use crate::models::client::{Client, CreateClient, UpdateClient};

const COLUMNS: &str = "id, user_id, full_name, phone, email, notes, created_at, updated_at";

/// Provides tenant-scoped CRUD operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// List clients, newest first.
    ///
    /// `user_id = None` lists across all tenants (master keys only);
    /// `search` matches the full name case-insensitively.
    pub async fn list(
        pool: &PgPool,
        user_id: Option<&str>,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM clients \
             WHERE ($1::TEXT IS NULL OR user_id = $1) \
               AND ($2::TEXT IS NULL OR full_name ILIKE '%' || $2 || '%') \
             ORDER BY created_at DESC \
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(user_id)
            .bind(search)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count clients matching the same filters as [`Self::list`].
    pub async fn count(
        pool: &PgPool,
        user_id: Option<&str>,
        search: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM clients \
             WHERE ($1::TEXT IS NULL OR user_id = $1) \
               AND ($2::TEXT IS NULL OR full_name ILIKE '%' || $2 || '%')",
        )
        .bind(user_id)
        .bind(search)
        .fetch_one(pool)
        .await
    }

    /// Find a client by id within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        user_id: &str,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clients WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Create a client for a tenant.
    pub async fn create(
        pool: &PgPool,
        user_id: &str,
        input: &CreateClient,
    ) -> Result<Client, sqlx::Error> {
        let query = format!(
            "INSERT INTO clients (user_id, full_name, phone, email, notes) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(user_id)
            .bind(&input.full_name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Update a client. Returns `None` when the row does not exist for
    /// this tenant.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: &str,
        input: &UpdateClient,
    ) -> Result<Option<Client>, sqlx::Error> {
        let query = format!(
            "UPDATE clients SET \
                 full_name = COALESCE($3, full_name), \
                 phone = COALESCE($4, phone), \
                 email = COALESCE($5, email), \
                 notes = COALESCE($6, notes), \
                 updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Client>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.full_name)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a client. Returns `false` when the row does not exist for
    /// this tenant.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
