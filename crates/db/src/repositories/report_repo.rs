//! Repository for reporting queries over appointments.

use agendo_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::report::{RevenueSourceRow, TopClient};

/// Read-only aggregation queries for the reporting endpoints.
pub struct ReportRepo;

impl ReportRepo {
    /// Scheduled appointments of a tenant ending inside `[start, end)`,
    /// with booking-time prices and the linked service's current price.
    ///
    /// Grouping and price resolution happen in `agendo_core::revenue`.
    pub async fn revenue_rows(
        pool: &PgPool,
        user_id: &str,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<RevenueSourceRow>, sqlx::Error> {
        sqlx::query_as::<_, RevenueSourceRow>(
            "SELECT a.end_time, a.status, a.final_price, a.service_price, \
                    s.price AS service_base_price \
             FROM appointments a \
             LEFT JOIN services s ON s.id = a.service_id \
             WHERE a.user_id = $1 \
               AND a.status = 'scheduled' \
               AND a.end_time >= $2 AND a.end_time < $3",
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await
    }

    /// Top clients of a tenant by summed resolved revenue inside
    /// `[start, end)`, ties broken by appointment count.
    pub async fn top_clients(
        pool: &PgPool,
        user_id: &str,
        start: Timestamp,
        end: Timestamp,
        limit: i64,
    ) -> Result<Vec<TopClient>, sqlx::Error> {
        sqlx::query_as::<_, TopClient>(
            "SELECT c.id AS client_id, c.full_name, \
                    COUNT(*) AS appointment_count, \
                    SUM(COALESCE(a.final_price, a.service_price, s.price, 0)) AS total_revenue \
             FROM appointments a \
             JOIN clients c ON c.id = a.client_id \
             LEFT JOIN services s ON s.id = a.service_id \
             WHERE a.user_id = $1 \
               AND a.status = 'scheduled' \
               AND a.end_time >= $2 AND a.end_time < $3 \
             GROUP BY c.id, c.full_name \
             ORDER BY total_revenue DESC, appointment_count DESC \
             LIMIT $4",
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
