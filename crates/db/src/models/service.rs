//! Service models and DTOs.

use agendo_core::types::{DbId, TenantId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `services` table.
///
/// `price` is the service's *current* price; appointments snapshot it at
/// booking time, so changing it here never rewrites past revenue.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub user_id: TenantId,
    pub name: String,
    pub price: Option<f64>,
    pub duration_minutes: Option<i32>,
    pub available_days: Vec<String>,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a service.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateService {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 1))]
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub available_days: Vec<String>,
    pub notes: Option<String>,
}

/// DTO for updating a service.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateService {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 1))]
    pub duration_minutes: Option<i32>,
    pub available_days: Option<Vec<String>>,
    pub notes: Option<String>,
    pub is_active: Option<bool>,
}
