//! Handlers for the `/collaborators` resource.
//!
//! Collaborators carry a set of service links used by the profile
//! document; creates and updates may replace that set wholesale.

use agendo_core::error::CoreError;
use agendo_core::types::DbId;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use agendo_db::models::collaborator::{CreateCollaborator, UpdateCollaborator};
use agendo_db::repositories::CollaboratorRepo;

use crate::auth::AuthKey;
use crate::error::{AppError, AppResult};
use crate::query::TenantParam;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/collaborators
pub async fn list(
    auth: AuthKey,
    State(state): State<AppState>,
    Query(tenant): Query<TenantParam>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    let collaborators = CollaboratorRepo::list(&state.pool, &user_id).await?;
    Ok(Json(DataResponse {
        data: collaborators,
    }))
}

/// POST /api/v1/collaborators
pub async fn create(
    auth: AuthKey,
    State(state): State<AppState>,
    Query(tenant): Query<TenantParam>,
    Json(input): Json<CreateCollaborator>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    input.validate()?;

    let collaborator = CollaboratorRepo::create(&state.pool, &user_id, &input).await?;
    CollaboratorRepo::set_services(&state.pool, collaborator.id, &user_id, &input.service_ids)
        .await?;

    tracing::info!(collaborator_id = collaborator.id, %user_id, "Collaborator created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: collaborator }),
    ))
}

/// PATCH /api/v1/collaborators/{id}
pub async fn update(
    auth: AuthKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(tenant): Query<TenantParam>,
    Json(input): Json<UpdateCollaborator>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    input.validate()?;

    let collaborator = CollaboratorRepo::update(&state.pool, id, &user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Collaborator",
            id,
        }))?;

    if let Some(service_ids) = &input.service_ids {
        CollaboratorRepo::set_services(&state.pool, id, &user_id, service_ids).await?;
    }

    Ok(Json(DataResponse { data: collaborator }))
}

/// DELETE /api/v1/collaborators/{id}
pub async fn delete(
    auth: AuthKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(tenant): Query<TenantParam>,
) -> AppResult<StatusCode> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    let deleted = CollaboratorRepo::delete(&state.pool, id, &user_id).await?;
    if deleted {
        tracing::info!(collaborator_id = id, %user_id, "Collaborator deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Collaborator",
            id,
        }))
    }
}
