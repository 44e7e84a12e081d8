//! Repository for the `collaborators` and `collaborator_services` tables.

use agendo_core::types::DbId;
use sqlx::PgPool;

use crate::models::collaborator::{Collaborator, CreateCollaborator, UpdateCollaborator};

const COLUMNS: &str = "\
    id, user_id, name, profession, phone, description, working_hours, \
    created_at, updated_at";

/// Provides tenant-scoped CRUD operations for collaborators and their
/// service links.
pub struct CollaboratorRepo;

impl CollaboratorRepo {
    /// List a tenant's collaborators ordered by name.
    pub async fn list(pool: &PgPool, user_id: &str) -> Result<Vec<Collaborator>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM collaborators WHERE user_id = $1 ORDER BY name");
        sqlx::query_as::<_, Collaborator>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a collaborator by id within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        user_id: &str,
    ) -> Result<Option<Collaborator>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM collaborators WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Collaborator>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Create a collaborator for a tenant.
    pub async fn create(
        pool: &PgPool,
        user_id: &str,
        input: &CreateCollaborator,
    ) -> Result<Collaborator, sqlx::Error> {
        let query = format!(
            "INSERT INTO collaborators (user_id, name, profession, phone, description, working_hours) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Collaborator>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.profession)
            .bind(&input.phone)
            .bind(&input.description)
            .bind(&input.working_hours)
            .fetch_one(pool)
            .await
    }

    /// Update a collaborator. Returns `None` when the row does not exist
    /// for this tenant.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: &str,
        input: &UpdateCollaborator,
    ) -> Result<Option<Collaborator>, sqlx::Error> {
        let query = format!(
            "UPDATE collaborators SET \
                 name = COALESCE($3, name), \
                 profession = COALESCE($4, profession), \
                 phone = COALESCE($5, phone), \
                 description = COALESCE($6, description), \
                 working_hours = COALESCE($7, working_hours), \
                 updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Collaborator>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.profession)
            .bind(&input.phone)
            .bind(&input.description)
            .bind(&input.working_hours)
            .fetch_optional(pool)
            .await
    }

    /// Delete a collaborator. Returns `false` when the row does not exist
    /// for this tenant. Service links go with it via cascade.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM collaborators WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace a collaborator's service links wholesale.
    ///
    /// Only services owned by the same tenant are linked; foreign ids are
    /// silently dropped by the ownership join.
    pub async fn set_services(
        pool: &PgPool,
        collaborator_id: DbId,
        user_id: &str,
        service_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM collaborator_services WHERE collaborator_id = $1")
            .bind(collaborator_id)
            .execute(pool)
            .await?;

        if !service_ids.is_empty() {
            sqlx::query(
                "INSERT INTO collaborator_services (collaborator_id, service_id) \
                 SELECT $1, s.id FROM services s \
                 WHERE s.id = ANY($2) AND s.user_id = $3 \
                 ON CONFLICT DO NOTHING",
            )
            .bind(collaborator_id)
            .bind(service_ids)
            .bind(user_id)
            .execute(pool)
            .await?;
        }

        Ok(())
    }

    /// Names of the services linked to a collaborator, ordered by name.
    pub async fn service_names(
        pool: &PgPool,
        collaborator_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT s.name FROM collaborator_services cs \
             JOIN services s ON s.id = cs.service_id \
             WHERE cs.collaborator_id = $1 \
             ORDER BY s.name",
        )
        .bind(collaborator_id)
        .fetch_all(pool)
        .await
    }
}
