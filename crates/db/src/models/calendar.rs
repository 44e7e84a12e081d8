//! Calendar models and DTOs.

use agendo_core::types::{DbId, TenantId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `calendars` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Calendar {
    pub id: DbId,
    pub user_id: TenantId,
    pub name: String,
    pub collaborator_id: Option<DbId>,
    pub is_active: bool,
    pub access_code: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a calendar.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCalendar {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub collaborator_id: Option<DbId>,
    pub access_code: Option<String>,
}

/// DTO for updating a calendar.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCalendar {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub collaborator_id: Option<DbId>,
    pub is_active: Option<bool>,
    pub access_code: Option<String>,
}
