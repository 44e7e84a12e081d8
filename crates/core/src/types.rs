/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Tenant identifiers are opaque subjects issued by the hosted identity
/// provider, not database rows.
pub type TenantId = String;
