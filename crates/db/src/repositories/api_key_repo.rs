//! Repository for the `api_keys` table.

use agendo_core::types::DbId;
use sqlx::PgPool;

use crate::models::api_key::ApiKey;

const COLUMNS: &str = "\
    id, user_id, name, key_hash, key_prefix, is_master, is_active, \
    last_used_at, revoked_at, created_at, updated_at";

/// Provides CRUD operations for API keys.
pub struct ApiKeyRepo;

impl ApiKeyRepo {
    /// Create a new API key. Returns the full row (with hash).
    pub async fn create(
        pool: &PgPool,
        name: &str,
        user_id: Option<&str>,
        is_master: bool,
        key_hash: &str,
        key_prefix: &str,
    ) -> Result<ApiKey, sqlx::Error> {
        let query = format!(
            "INSERT INTO api_keys (name, user_id, is_master, key_hash, key_prefix) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ApiKey>(&query)
            .bind(name)
            .bind(user_id)
            .bind(is_master)
            .bind(key_hash)
            .bind(key_prefix)
            .fetch_one(pool)
            .await
    }

    /// List API keys, newest first, optionally narrowed to one tenant.
    /// The hash is never serialized to responses.
    pub async fn list(pool: &PgPool, user_id: Option<&str>) -> Result<Vec<ApiKey>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM api_keys \
             WHERE ($1::TEXT IS NULL OR user_id = $1) \
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ApiKey>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find an active, non-revoked API key by its SHA-256 hash.
    ///
    /// Used during authentication. Returns the key only if it is valid.
    pub async fn find_by_hash(pool: &PgPool, key_hash: &str) -> Result<Option<ApiKey>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM api_keys \
             WHERE key_hash = $1 AND is_active AND revoked_at IS NULL"
        );
        sqlx::query_as::<_, ApiKey>(&query)
            .bind(key_hash)
            .fetch_optional(pool)
            .await
    }

    /// Record that a key was just used. Best-effort: callers ignore the
    /// result.
    pub async fn touch_last_used(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE api_keys SET last_used_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Delete an API key. Returns `false` when no such key exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM api_keys WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
