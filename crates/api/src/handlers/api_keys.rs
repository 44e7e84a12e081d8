//! Handlers for the `/api-keys` resource.
//!
//! All endpoints require a master key. The plaintext key is returned
//! **only** on creation; subsequent queries expose only the `key_prefix`
//! for identification.

use agendo_core::api_keys::generate_api_key;
use agendo_core::error::CoreError;
use agendo_core::types::DbId;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use agendo_db::models::api_key::{ApiKeyCreatedResponse, CreateApiKey};
use agendo_db::repositories::ApiKeyRepo;

use crate::auth::AuthKey;
use crate::error::{AppError, AppResult};
use crate::query::TenantParam;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/api-keys
///
/// List keys, optionally narrowed to one tenant via `?userId=`. Shows
/// prefix only, never the full key.
pub async fn list(
    auth: AuthKey,
    State(state): State<AppState>,
    Query(tenant): Query<TenantParam>,
) -> AppResult<impl IntoResponse> {
    auth.require_master()?;
    let keys = ApiKeyRepo::list(&state.pool, tenant.user_id.as_deref()).await?;
    Ok(Json(DataResponse { data: keys }))
}

/// POST /api/v1/api-keys
///
/// Generate a new API key. The plaintext key is returned exactly once.
pub async fn create(
    auth: AuthKey,
    State(state): State<AppState>,
    Json(input): Json<CreateApiKey>,
) -> AppResult<impl IntoResponse> {
    auth.require_master()?;
    input.validate()?;

    if !input.is_master && input.user_id.is_none() {
        return Err(AppError::BadRequest(
            "user_id is required for tenant keys".into(),
        ));
    }

    let generated = generate_api_key();

    let key = ApiKeyRepo::create(
        &state.pool,
        input.name.trim(),
        input.user_id.as_deref(),
        input.is_master,
        &generated.hash,
        &generated.prefix,
    )
    .await?;

    tracing::info!(
        api_key_id = key.id,
        key_prefix = %generated.prefix,
        is_master = key.is_master,
        "API key created",
    );

    let response = ApiKeyCreatedResponse {
        id: key.id,
        name: key.name,
        key_prefix: generated.prefix,
        plaintext_key: generated.plaintext,
        user_id: key.user_id,
        is_master: key.is_master,
        created_at: key.created_at,
    };

    Ok((StatusCode::CREATED, Json(DataResponse { data: response })))
}

/// DELETE /api/v1/api-keys/{id}
pub async fn delete(
    auth: AuthKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    auth.require_master()?;

    let deleted = ApiKeyRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(api_key_id = id, "API key deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ApiKey",
            id,
        }))
    }
}
