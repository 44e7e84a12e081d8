//! Repository for the `instances` table.

use sqlx::PgPool;

use crate::models::instance::Instance;

const COLUMNS: &str = "id, user_id, name, created_at, updated_at";

/// Lookup for messaging-channel instances.
pub struct InstanceRepo;

impl InstanceRepo {
    /// Find an instance by its globally unique name.
    ///
    /// Not tenant-scoped: the instance is what determines the tenant for
    /// instance-scoped queries.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Instance>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM instances WHERE name = $1");
        sqlx::query_as::<_, Instance>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }
}
