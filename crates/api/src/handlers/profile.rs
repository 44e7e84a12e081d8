//! Handlers for the `/profile` resource and its webhook sync.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use agendo_db::models::profile::SaveProfile;
use agendo_db::repositories::ProfileRepo;

use crate::auth::AuthKey;
use crate::error::{AppError, AppResult};
use crate::query::TenantParam;
use crate::response::DataResponse;
use crate::state::AppState;
use crate::sync;

/// GET /api/v1/profile
pub async fn get(
    auth: AuthKey,
    State(state): State<AppState>,
    Query(tenant): Query<TenantParam>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    let profile = ProfileRepo::find_by_user(&state.pool, &user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No profile saved for this tenant".into()))?;
    Ok(Json(DataResponse { data: profile }))
}

/// PUT /api/v1/profile
///
/// Upserts the tenant's profile and kicks off a background webhook sync;
/// the response never waits for (or reflects) the delivery.
pub async fn save(
    auth: AuthKey,
    State(state): State<AppState>,
    Query(tenant): Query<TenantParam>,
    Json(input): Json<SaveProfile>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    input.validate()?;

    let profile = ProfileRepo::upsert(&state.pool, &user_id, &input).await?;

    tracing::info!(%user_id, "Profile saved");
    sync::spawn_profile_sync(&state, user_id);

    Ok(Json(DataResponse { data: profile }))
}

/// POST /api/v1/profile/sync
///
/// Synchronous sync trigger. The outcome (sent, skipped, failed) is the
/// response data; delivery problems are never HTTP errors.
pub async fn trigger_sync(
    auth: AuthKey,
    State(state): State<AppState>,
    Query(tenant): Query<TenantParam>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    let outcome = sync::sync_profile(&state, &user_id).await?;
    Ok(Json(DataResponse { data: outcome }))
}
