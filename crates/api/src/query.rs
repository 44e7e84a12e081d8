//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication. Handlers combine them as multiple
//! `Query<..>` extractors.

use agendo_core::types::DbId;
use chrono::NaiveDate;
use serde::Deserialize;

/// Generic pagination parameters (`?page=&limit=`).
///
/// `page` is 1-based; both values are clamped via
/// `agendo_core::pagination` before reaching the repository layer.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Tenant override (`?userId=`), honored only for master keys.
#[derive(Debug, Deserialize)]
pub struct TenantParam {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// Free-text search filter (`?search=`).
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

/// Query parameters for list endpoints that support an `include_inactive`
/// flag (services, calendars).
#[derive(Debug, Deserialize)]
pub struct IncludeInactiveParams {
    #[serde(default)]
    pub include_inactive: bool,
}

/// A single calendar day (`?date=YYYY-MM-DD`).
#[derive(Debug, Deserialize)]
pub struct DateParam {
    pub date: NaiveDate,
}

/// An inclusive day range (`?from=YYYY-MM-DD&to=YYYY-MM-DD`).
#[derive(Debug, Deserialize)]
pub struct DateRangeParams {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Appointment list filters.
#[derive(Debug, Deserialize)]
pub struct AppointmentFilterParams {
    pub collaborator_id: Option<DbId>,
    pub status: Option<String>,
}

/// Parameters of the instance-scoped day view
/// (`?instance=&date=&calendarId=`).
#[derive(Debug, Deserialize)]
pub struct InstanceDayParams {
    pub instance: String,
    pub date: NaiveDate,
    #[serde(rename = "calendarId")]
    pub calendar_id: Option<DbId>,
}

/// Result size for ranking endpoints (`?limit=`).
#[derive(Debug, Deserialize)]
pub struct RankingParams {
    pub limit: Option<i64>,
}
