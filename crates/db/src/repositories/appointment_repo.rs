//! Repository for the `appointments` table.
//!
//! List and day views return [`AppointmentDetail`] rows with the names of
//! the referenced client/service/collaborator/calendar joined in; writes
//! return the bare [`Appointment`] row.

use agendo_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::appointment::{
    Appointment, AppointmentDetail, CreateAppointment, UpdateAppointment,
};

const COLUMNS: &str = "\
    id, user_id, client_id, service_id, collaborator_id, calendar_id, \
    start_time, end_time, status, final_price, service_price, notes, \
    created_at, updated_at";

const DETAIL_COLUMNS: &str = "\
    a.id, a.user_id, a.client_id, a.service_id, a.collaborator_id, a.calendar_id, \
    a.start_time, a.end_time, a.status, a.final_price, a.service_price, a.notes, \
    c.full_name AS client_name, c.phone AS client_phone, \
    s.name AS service_name, co.name AS collaborator_name, cal.name AS calendar_name";

const DETAIL_JOINS: &str = "\
    FROM appointments a \
    JOIN clients c ON c.id = a.client_id \
    LEFT JOIN services s ON s.id = a.service_id \
    LEFT JOIN collaborators co ON co.id = a.collaborator_id \
    LEFT JOIN calendars cal ON cal.id = a.calendar_id";

/// Provides tenant-scoped CRUD and calendar views for appointments.
pub struct AppointmentRepo;

impl AppointmentRepo {
    /// List a tenant's appointments ordered by start time.
    ///
    /// `search` matches the client's full name, the service name, or the
    /// collaborator name case-insensitively; `collaborator_id` and
    /// `status` narrow further.
    pub async fn list(
        pool: &PgPool,
        user_id: &str,
        collaborator_id: Option<DbId>,
        search: Option<&str>,
        status: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AppointmentDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} {DETAIL_JOINS} \
             WHERE a.user_id = $1 \
               AND ($2::BIGINT IS NULL OR a.collaborator_id = $2) \
               AND ($3::TEXT IS NULL \
                    OR c.full_name ILIKE '%' || $3 || '%' \
                    OR s.name ILIKE '%' || $3 || '%' \
                    OR co.name ILIKE '%' || $3 || '%') \
               AND ($4::TEXT IS NULL OR a.status = $4) \
             ORDER BY a.start_time \
             LIMIT $5 OFFSET $6"
        );
        sqlx::query_as::<_, AppointmentDetail>(&query)
            .bind(user_id)
            .bind(collaborator_id)
            .bind(search)
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count appointments matching the same filters as [`Self::list`].
    pub async fn count(
        pool: &PgPool,
        user_id: &str,
        collaborator_id: Option<DbId>,
        search: Option<&str>,
        status: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        let query = format!(
            "SELECT COUNT(*) {DETAIL_JOINS} \
             WHERE a.user_id = $1 \
               AND ($2::BIGINT IS NULL OR a.collaborator_id = $2) \
               AND ($3::TEXT IS NULL \
                    OR c.full_name ILIKE '%' || $3 || '%' \
                    OR s.name ILIKE '%' || $3 || '%' \
                    OR co.name ILIKE '%' || $3 || '%') \
               AND ($4::TEXT IS NULL OR a.status = $4)"
        );
        sqlx::query_scalar(&query)
            .bind(user_id)
            .bind(collaborator_id)
            .bind(search)
            .bind(status)
            .fetch_one(pool)
            .await
    }

    /// Find an appointment (with joined names) by id within a tenant.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        user_id: &str,
    ) -> Result<Option<AppointmentDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} {DETAIL_JOINS} WHERE a.id = $1 AND a.user_id = $2"
        );
        sqlx::query_as::<_, AppointmentDetail>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Scheduled appointments of one calendar within a day window,
    /// ordered by start time.
    pub async fn list_for_day(
        pool: &PgPool,
        calendar_id: DbId,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<AppointmentDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} {DETAIL_JOINS} \
             WHERE a.calendar_id = $1 \
               AND a.start_time >= $2 AND a.start_time < $3 \
               AND a.status = 'scheduled' \
             ORDER BY a.start_time"
        );
        sqlx::query_as::<_, AppointmentDetail>(&query)
            .bind(calendar_id)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await
    }

    /// All of a tenant's appointments within a day window, optionally
    /// narrowed to one calendar, ordered by start time.
    pub async fn list_for_instance_day(
        pool: &PgPool,
        user_id: &str,
        start: Timestamp,
        end: Timestamp,
        calendar_id: Option<DbId>,
    ) -> Result<Vec<AppointmentDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} {DETAIL_JOINS} \
             WHERE a.user_id = $1 \
               AND a.start_time >= $2 AND a.start_time < $3 \
               AND ($4::BIGINT IS NULL OR a.calendar_id = $4) \
             ORDER BY a.start_time"
        );
        sqlx::query_as::<_, AppointmentDetail>(&query)
            .bind(user_id)
            .bind(start)
            .bind(end)
            .bind(calendar_id)
            .fetch_all(pool)
            .await
    }

    /// Book an appointment.
    ///
    /// `service_price` is the snapshot of the service's price at booking
    /// time, resolved by the caller.
    pub async fn create(
        pool: &PgPool,
        user_id: &str,
        input: &CreateAppointment,
        service_price: Option<f64>,
    ) -> Result<Appointment, sqlx::Error> {
        let query = format!(
            "INSERT INTO appointments \
                 (user_id, client_id, service_id, collaborator_id, calendar_id, \
                  start_time, end_time, final_price, service_price, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(user_id)
            .bind(input.client_id)
            .bind(input.service_id)
            .bind(input.collaborator_id)
            .bind(input.calendar_id)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(input.final_price)
            .bind(service_price)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Update an appointment (fields and/or status). Returns `None` when
    /// the row does not exist for this tenant.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: &str,
        input: &UpdateAppointment,
    ) -> Result<Option<Appointment>, sqlx::Error> {
        let query = format!(
            "UPDATE appointments SET \
                 client_id = COALESCE($3, client_id), \
                 service_id = COALESCE($4, service_id), \
                 collaborator_id = COALESCE($5, collaborator_id), \
                 calendar_id = COALESCE($6, calendar_id), \
                 start_time = COALESCE($7, start_time), \
                 end_time = COALESCE($8, end_time), \
                 status = COALESCE($9, status), \
                 final_price = COALESCE($10, final_price), \
                 notes = COALESCE($11, notes), \
                 updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.client_id)
            .bind(input.service_id)
            .bind(input.collaborator_id)
            .bind(input.calendar_id)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.status)
            .bind(input.final_price)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete an appointment. Returns `false` when the row does not exist
    /// for this tenant.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
