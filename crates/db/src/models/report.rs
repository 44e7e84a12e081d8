//! Reporting row types.

use agendo_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// One appointment row as fetched for revenue aggregation: the prices
/// captured at booking time plus the linked service's current price.
#[derive(Debug, Clone, FromRow)]
pub struct RevenueSourceRow {
    pub end_time: Timestamp,
    pub status: String,
    pub final_price: Option<f64>,
    pub service_price: Option<f64>,
    pub service_base_price: Option<f64>,
}

/// One entry of the top-clients ranking.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TopClient {
    pub client_id: DbId,
    pub full_name: String,
    pub appointment_count: i64,
    pub total_revenue: f64,
}
