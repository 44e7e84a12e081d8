//! Handlers for the `/services` resource.

use agendo_core::error::CoreError;
use agendo_core::types::DbId;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use agendo_db::models::service::{CreateService, UpdateService};
use agendo_db::repositories::ServiceRepo;

use crate::auth::AuthKey;
use crate::error::{AppError, AppResult};
use crate::query::{IncludeInactiveParams, TenantParam};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/services
///
/// Ordered by name; deactivated services show up only with
/// `?include_inactive=true`.
pub async fn list(
    auth: AuthKey,
    State(state): State<AppState>,
    Query(tenant): Query<TenantParam>,
    Query(flags): Query<IncludeInactiveParams>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    let services = ServiceRepo::list(&state.pool, &user_id, flags.include_inactive).await?;
    Ok(Json(DataResponse { data: services }))
}

/// POST /api/v1/services
pub async fn create(
    auth: AuthKey,
    State(state): State<AppState>,
    Query(tenant): Query<TenantParam>,
    Json(input): Json<CreateService>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    input.validate()?;

    let service = ServiceRepo::create(&state.pool, &user_id, &input).await?;

    tracing::info!(service_id = service.id, %user_id, "Service created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: service })))
}

/// PATCH /api/v1/services/{id}
///
/// Re-pricing here never touches booked appointments: their snapshot
/// prices are already captured.
pub async fn update(
    auth: AuthKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(tenant): Query<TenantParam>,
    Json(input): Json<UpdateService>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    input.validate()?;

    let service = ServiceRepo::update(&state.pool, id, &user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }))?;

    Ok(Json(DataResponse { data: service }))
}

/// DELETE /api/v1/services/{id}
pub async fn delete(
    auth: AuthKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(tenant): Query<TenantParam>,
) -> AppResult<StatusCode> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    let deleted = ServiceRepo::delete(&state.pool, id, &user_id).await?;
    if deleted {
        tracing::info!(service_id = id, %user_id, "Service deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }))
    }
}
