//! Collaborator (professional) models and DTOs.

use agendo_core::types::{DbId, TenantId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `collaborators` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Collaborator {
    pub id: DbId,
    pub user_id: TenantId,
    pub name: String,
    pub profession: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub working_hours: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a collaborator.
///
/// `service_ids` replaces the collaborator's service links wholesale.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCollaborator {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub profession: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub working_hours: Option<String>,
    #[serde(default)]
    pub service_ids: Vec<DbId>,
}

/// DTO for updating a collaborator.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCollaborator {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    pub profession: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub working_hours: Option<String>,
    /// When present, replaces the collaborator's service links wholesale.
    pub service_ids: Option<Vec<DbId>>,
}
