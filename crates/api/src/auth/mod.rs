//! API-key authentication extractor and tenant scoping.
//!
//! Every `/api/v1` route (except health) authenticates by an
//! `Authorization` header carrying an API key. The key's SHA-256 hash is
//! looked up in `api_keys`; the row pins the caller to its tenant unless
//! the key is a master key, which may act on behalf of any tenant via the
//! `?userId=` query parameter.

use agendo_core::api_keys::hash_api_key;
use agendo_core::error::CoreError;
use agendo_core::types::{DbId, TenantId};
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use agendo_db::repositories::ApiKeyRepo;

use crate::error::AppError;
use crate::state::AppState;

/// Authenticated API key extracted from the `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(auth: AuthKey) -> AppResult<Json<()>> {
///     let tenant = auth.require_tenant(None)?;
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthKey {
    /// The key's database id.
    pub key_id: DbId,
    /// The tenant the key belongs to. `None` for global master keys.
    pub tenant_id: Option<TenantId>,
    /// Master keys may act on behalf of any tenant.
    pub is_master: bool,
}

impl FromRequestParts<AppState> for AuthKey {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        // Tolerate both a bare key and the `Bearer <key>` form.
        let plaintext = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);
        if plaintext.is_empty() {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Empty API key".into(),
            )));
        }

        let key = ApiKeyRepo::find_by_hash(&state.pool, &hash_api_key(plaintext))
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Invalid or revoked API key".into()))
            })?;

        // Best-effort usage stamp; an error here must not fail the request.
        if let Err(err) = ApiKeyRepo::touch_last_used(&state.pool, key.id).await {
            tracing::warn!(api_key_id = key.id, error = %err, "Failed to stamp API key usage");
        }

        Ok(AuthKey {
            key_id: key.id,
            tenant_id: key.user_id,
            is_master: key.is_master,
        })
    }
}

impl AuthKey {
    /// Tenant filter for listings: master keys may select any tenant via
    /// `requested`, or none at all to list across tenants. Tenant keys
    /// are always pinned to their own tenant; the parameter is ignored.
    pub fn read_scope(&self, requested: Option<String>) -> Result<Option<TenantId>, AppError> {
        if self.is_master {
            return Ok(requested);
        }
        self.own_tenant().map(Some)
    }

    /// Concrete tenant for single-tenant reads and all writes. Master
    /// keys must name a tenant (via `?userId=`) unless the key itself is
    /// bound to one.
    pub fn require_tenant(&self, requested: Option<String>) -> Result<TenantId, AppError> {
        if self.is_master {
            return requested
                .or_else(|| self.tenant_id.clone())
                .ok_or_else(|| {
                    AppError::BadRequest("userId is required when using a master key".into())
                });
        }
        self.own_tenant()
    }

    /// Reject anything but a master key.
    pub fn require_master(&self) -> Result<(), AppError> {
        if self.is_master {
            Ok(())
        } else {
            Err(AppError::Core(CoreError::Forbidden(
                "This operation requires a master key".into(),
            )))
        }
    }

    fn own_tenant(&self) -> Result<TenantId, AppError> {
        self.tenant_id.clone().ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "API key is not bound to a tenant".into(),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn tenant_key() -> AuthKey {
        AuthKey {
            key_id: 1,
            tenant_id: Some("tenant_a".into()),
            is_master: false,
        }
    }

    fn master_key() -> AuthKey {
        AuthKey {
            key_id: 2,
            tenant_id: None,
            is_master: true,
        }
    }

    #[test]
    fn tenant_key_ignores_requested_override() {
        let key = tenant_key();
        assert_eq!(
            key.read_scope(Some("tenant_b".into())).unwrap(),
            Some("tenant_a".into())
        );
        assert_eq!(
            key.require_tenant(Some("tenant_b".into())).unwrap(),
            "tenant_a"
        );
    }

    #[test]
    fn master_key_may_impersonate_or_list_unscoped() {
        let key = master_key();
        assert_eq!(
            key.read_scope(Some("tenant_b".into())).unwrap(),
            Some("tenant_b".into())
        );
        assert_eq!(key.read_scope(None).unwrap(), None);
        assert_eq!(
            key.require_tenant(Some("tenant_b".into())).unwrap(),
            "tenant_b"
        );
    }

    #[test]
    fn master_key_without_tenant_cannot_write() {
        let key = master_key();
        assert_matches!(key.require_tenant(None), Err(AppError::BadRequest(_)));
    }

    #[test]
    fn unbound_tenant_key_is_rejected() {
        let key = AuthKey {
            key_id: 3,
            tenant_id: None,
            is_master: false,
        };
        assert_matches!(
            key.read_scope(None),
            Err(AppError::Core(CoreError::Unauthorized(_)))
        );
    }

    #[test]
    fn master_gate() {
        assert_matches!(
            tenant_key().require_master(),
            Err(AppError::Core(CoreError::Forbidden(_)))
        );
        assert!(master_key().require_master().is_ok());
    }
}
