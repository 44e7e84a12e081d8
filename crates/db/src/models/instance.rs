//! Messaging-channel instance models.
//!
//! Instances map a channel name to the tenant it belongs to; the
//! instance-scoped appointment lookup resolves the tenant through them.
//! They are provisioned by the messaging integration, not through this API.

use agendo_core::types::{DbId, TenantId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `instances` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Instance {
    pub id: DbId,
    pub user_id: TenantId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
