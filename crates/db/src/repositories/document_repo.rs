//! Repository for the `documents` table.

use agendo_core::types::DbId;
use sqlx::PgPool;

use crate::models::document::{CreateDocument, DocumentRecord, UpdateDocument};

const COLUMNS: &str = "\
    id, user_id, name, file_url, file_type, description, created_at, updated_at";

/// Provides tenant-scoped CRUD operations for document records.
pub struct DocumentRepo;

impl DocumentRepo {
    /// List documents, newest first. `user_id = None` lists across all
    /// tenants (master keys only).
    pub async fn list(
        pool: &PgPool,
        user_id: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<DocumentRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM documents \
             WHERE ($1::TEXT IS NULL OR user_id = $1) \
             ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, DocumentRecord>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count documents matching the same filter as [`Self::list`].
    pub async fn count(pool: &PgPool, user_id: Option<&str>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM documents WHERE ($1::TEXT IS NULL OR user_id = $1)",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
    }

    /// Create a document record for a tenant.
    pub async fn create(
        pool: &PgPool,
        user_id: &str,
        input: &CreateDocument,
    ) -> Result<DocumentRecord, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents (user_id, name, file_url, file_type, description) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DocumentRecord>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.file_url)
            .bind(&input.file_type)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Update a document record. Returns `None` when the row does not
    /// exist for this tenant.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: &str,
        input: &UpdateDocument,
    ) -> Result<Option<DocumentRecord>, sqlx::Error> {
        let query = format!(
            "UPDATE documents SET \
                 name = COALESCE($3, name), \
                 file_url = COALESCE($4, file_url), \
                 file_type = COALESCE($5, file_type), \
                 description = COALESCE($6, description), \
                 updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DocumentRecord>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.file_url)
            .bind(&input.file_type)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a document record. Returns `false` when the row does not
    /// exist for this tenant.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
