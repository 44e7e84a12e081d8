//! Link models and DTOs.

use agendo_core::types::{DbId, TenantId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `links` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Link {
    pub id: DbId,
    pub user_id: TenantId,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a link.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLink {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(url)]
    pub url: String,
    pub description: Option<String>,
}

/// DTO for updating a link.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateLink {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(url)]
    pub url: Option<String>,
    pub description: Option<String>,
}
