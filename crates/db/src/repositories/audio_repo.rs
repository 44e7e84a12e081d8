//! Repository for the `audio_records` table.

use agendo_core::types::DbId;
use sqlx::PgPool;

use crate::models::audio::{AudioRecord, CreateAudio, UpdateAudio};

const COLUMNS: &str = "id, user_id, description, audio_base64, created_at, updated_at";

/// Provides tenant-scoped CRUD operations for audio records.
pub struct AudioRepo;

impl AudioRepo {
    /// List audio records, newest first. `user_id = None` lists across
    /// all tenants (master keys only).
    pub async fn list(
        pool: &PgPool,
        user_id: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AudioRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM audio_records \
             WHERE ($1::TEXT IS NULL OR user_id = $1) \
             ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, AudioRecord>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count audio records matching the same filter as [`Self::list`].
    pub async fn count(pool: &PgPool, user_id: Option<&str>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM audio_records WHERE ($1::TEXT IS NULL OR user_id = $1)",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Find an audio record by id, optionally pinned to a tenant.
    ///
    /// Master keys read without a tenant filter; tenant keys always pass
    /// their own id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        user_id: Option<&str>,
    ) -> Result<Option<AudioRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM audio_records \
             WHERE id = $1 AND ($2::TEXT IS NULL OR user_id = $2)"
        );
        sqlx::query_as::<_, AudioRecord>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Create an audio record for a tenant.
    pub async fn create(
        pool: &PgPool,
        user_id: &str,
        input: &CreateAudio,
    ) -> Result<AudioRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO audio_records (user_id, description, audio_base64) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AudioRecord>(&query)
            .bind(user_id)
            .bind(&input.description)
            .bind(&input.audio_base64)
            .fetch_one(pool)
            .await
    }

    /// Update an audio record. Returns `None` when the row does not exist
    /// for this tenant.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: &str,
        input: &UpdateAudio,
    ) -> Result<Option<AudioRecord>, sqlx::Error> {
        let query = format!(
            "UPDATE audio_records SET \
                 description = COALESCE($3, description), \
                 audio_base64 = COALESCE($4, audio_base64), \
                 updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AudioRecord>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.description)
            .bind(&input.audio_base64)
            .fetch_optional(pool)
            .await
    }

    /// Delete an audio record. Returns `false` when the row does not
    /// exist for this tenant.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM audio_records WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
