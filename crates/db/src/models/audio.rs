//! Audio record models and DTOs.
//!
//! Audio payloads are stored inline as base64 text, matching how the
//! messaging integration delivers them.

use agendo_core::types::{DbId, TenantId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `audio_records` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AudioRecord {
    pub id: DbId,
    pub user_id: TenantId,
    pub description: String,
    pub audio_base64: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an audio record.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAudio {
    #[validate(length(min = 1, max = 500))]
    pub description: String,
    #[validate(length(min = 1))]
    pub audio_base64: String,
}

/// DTO for updating an audio record.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAudio {
    #[validate(length(min = 1, max = 500))]
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub audio_base64: Option<String>,
}
