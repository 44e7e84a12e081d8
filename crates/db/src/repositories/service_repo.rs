//! Repository for the `services` table.

use agendo_core::types::DbId;
use sqlx::PgPool;

use crate::models::service::{CreateService, Service, UpdateService};

const COLUMNS: &str = "\
    id, user_id, name, price, duration_minutes, available_days, notes, \
    is_active, created_at, updated_at";

/// Provides tenant-scoped CRUD operations for services.
pub struct ServiceRepo;

impl ServiceRepo {
    /// List a tenant's services ordered by name. Inactive services are
    /// included only when `include_inactive` is set.
    pub async fn list(
        pool: &PgPool,
        user_id: &str,
        include_inactive: bool,
    ) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM services \
             WHERE user_id = $1 AND ($2 OR is_active) \
             ORDER BY name"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(user_id)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Find a service by id within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        user_id: &str,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Create a service for a tenant.
    pub async fn create(
        pool: &PgPool,
        user_id: &str,
        input: &CreateService,
    ) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services (user_id, name, price, duration_minutes, available_days, notes) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(input.price)
            .bind(input.duration_minutes)
            .bind(&input.available_days)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Update a service. Returns `None` when the row does not exist for
    /// this tenant.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: &str,
        input: &UpdateService,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET \
                 name = COALESCE($3, name), \
                 price = COALESCE($4, price), \
                 duration_minutes = COALESCE($5, duration_minutes), \
                 available_days = COALESCE($6, available_days), \
                 notes = COALESCE($7, notes), \
                 is_active = COALESCE($8, is_active), \
                 updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(input.price)
            .bind(input.duration_minutes)
            .bind(&input.available_days)
            .bind(&input.notes)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a service. Returns `false` when the row does not exist for
    /// this tenant.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
