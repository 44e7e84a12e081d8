//! Document record models and DTOs.
//!
//! Rows reference files stored elsewhere; upload mechanics are not this
//! system's concern.

use agendo_core::types::{DbId, TenantId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `documents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DocumentRecord {
    pub id: DbId,
    pub user_id: TenantId,
    pub name: String,
    pub file_url: String,
    pub file_type: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a document record.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDocument {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(url)]
    pub file_url: String,
    pub file_type: Option<String>,
    pub description: Option<String>,
}

/// DTO for updating a document record.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateDocument {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(url)]
    pub file_url: Option<String>,
    pub file_type: Option<String>,
    pub description: Option<String>,
}
