//! Repository for the `calendars` table.

use agendo_core::types::DbId;
use sqlx::PgPool;

use crate::models::calendar::{Calendar, CreateCalendar, UpdateCalendar};

const COLUMNS: &str = "\
    id, user_id, name, collaborator_id, is_active, access_code, \
    created_at, updated_at";

/// Provides tenant-scoped CRUD operations for calendars.
pub struct CalendarRepo;

impl CalendarRepo {
    /// List a tenant's calendars ordered by name. Inactive calendars are
    /// included only when `include_inactive` is set.
    pub async fn list(
        pool: &PgPool,
        user_id: &str,
        include_inactive: bool,
    ) -> Result<Vec<Calendar>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM calendars \
             WHERE user_id = $1 AND ($2 OR is_active) \
             ORDER BY name"
        );
        sqlx::query_as::<_, Calendar>(&query)
            .bind(user_id)
            .bind(include_inactive)
            .fetch_all(pool)
            .await
    }

    /// Find a calendar by id within a tenant.
    ///
    /// This is the ownership check the day view performs before querying
    /// appointments.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        user_id: &str,
    ) -> Result<Option<Calendar>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM calendars WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Calendar>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Create a calendar for a tenant.
    pub async fn create(
        pool: &PgPool,
        user_id: &str,
        input: &CreateCalendar,
    ) -> Result<Calendar, sqlx::Error> {
        let query = format!(
            "INSERT INTO calendars (user_id, name, collaborator_id, access_code) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Calendar>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(input.collaborator_id)
            .bind(&input.access_code)
            .fetch_one(pool)
            .await
    }

    /// Update a calendar. Returns `None` when the row does not exist for
    /// this tenant.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: &str,
        input: &UpdateCalendar,
    ) -> Result<Option<Calendar>, sqlx::Error> {
        let query = format!(
            "UPDATE calendars SET \
                 name = COALESCE($3, name), \
                 collaborator_id = COALESCE($4, collaborator_id), \
                 is_active = COALESCE($5, is_active), \
                 access_code = COALESCE($6, access_code), \
                 updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Calendar>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(input.collaborator_id)
            .bind(input.is_active)
            .bind(&input.access_code)
            .fetch_optional(pool)
            .await
    }

    /// Delete a calendar. Returns `false` when the row does not exist for
    /// this tenant.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM calendars WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
