//! Repository for the `profiles` table.

use sqlx::PgPool;

use crate::models::profile::{Profile, SaveProfile};

const COLUMNS: &str = "\
    id, user_id, company_name, address, whatsapp, document_number, \
    location_url, business_hours, created_at, updated_at";

/// Provides access to the one-per-tenant business profile.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Find a tenant's profile. Returns `None` if none has been saved yet.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: &str,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE user_id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Upsert a tenant's profile. Creates if absent, replaces if present.
    ///
    /// Uses `ON CONFLICT (user_id) DO UPDATE` to guarantee one row per
    /// tenant.
    pub async fn upsert(
        pool: &PgPool,
        user_id: &str,
        input: &SaveProfile,
    ) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles \
                 (user_id, company_name, address, whatsapp, document_number, \
                  location_url, business_hours) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (user_id) DO UPDATE SET \
                 company_name = EXCLUDED.company_name, \
                 address = EXCLUDED.address, \
                 whatsapp = EXCLUDED.whatsapp, \
                 document_number = EXCLUDED.document_number, \
                 location_url = EXCLUDED.location_url, \
                 business_hours = EXCLUDED.business_hours, \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .bind(&input.company_name)
            .bind(&input.address)
            .bind(&input.whatsapp)
            .bind(&input.document_number)
            .bind(&input.location_url)
            .bind(&input.business_hours)
            .fetch_one(pool)
            .await
    }
}
