//! Business profile models and DTOs.

use agendo_core::types::{DbId, TenantId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `profiles` table. One per tenant.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub user_id: TenantId,
    pub company_name: String,
    pub address: Option<String>,
    pub whatsapp: Option<String>,
    pub document_number: Option<String>,
    pub location_url: Option<String>,
    /// JSON array of `{day, open_time, close_time}` objects.
    pub business_hours: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or replacing a tenant's profile (upsert).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveProfile {
    #[validate(length(min = 1, max = 200))]
    pub company_name: String,
    pub address: Option<String>,
    pub whatsapp: Option<String>,
    pub document_number: Option<String>,
    #[validate(url)]
    pub location_url: Option<String>,
    pub business_hours: Option<serde_json::Value>,
}
