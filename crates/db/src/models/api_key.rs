//! API key models and DTOs.

use agendo_core::types::{DbId, TenantId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `api_keys` table.
///
/// **Note:** `key_hash` is never serialized to responses. The `key_prefix`
/// field is used for human-readable identification.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApiKey {
    pub id: DbId,
    /// `None` for global master keys.
    pub user_id: Option<TenantId>,
    pub name: String,
    #[serde(skip_serializing)]
    pub key_hash: String,
    pub key_prefix: String,
    pub is_master: bool,
    pub is_active: bool,
    pub last_used_at: Option<Timestamp>,
    pub revoked_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new API key.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateApiKey {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Tenant the key acts for; omit for a global master key.
    pub user_id: Option<TenantId>,
    #[serde(default)]
    pub is_master: bool,
}

/// Response returned when a new API key is created.
/// Includes the plaintext key (shown exactly once).
#[derive(Debug, Clone, Serialize)]
pub struct ApiKeyCreatedResponse {
    pub id: DbId,
    pub name: String,
    pub key_prefix: String,
    /// The full plaintext key. Shown **once** and never stored.
    pub plaintext_key: String,
    pub user_id: Option<TenantId>,
    pub is_master: bool,
    pub created_at: Timestamp,
}
