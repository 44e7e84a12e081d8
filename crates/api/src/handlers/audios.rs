//! Handlers for the `/audios` resource.

use agendo_core::error::CoreError;
use agendo_core::pagination;
use agendo_core::types::DbId;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use agendo_db::models::audio::{CreateAudio, UpdateAudio};
use agendo_db::repositories::AudioRepo;

use crate::auth::AuthKey;
use crate::error::{AppError, AppResult};
use crate::query::{PageParams, TenantParam};
use crate::response::{DataResponse, Paginated};
use crate::state::AppState;

/// GET /api/v1/audios
pub async fn list(
    auth: AuthKey,
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
    Query(tenant): Query<TenantParam>,
) -> AppResult<impl IntoResponse> {
    let scope = auth.read_scope(tenant.user_id)?;
    let limit = pagination::clamp_limit(page.limit);
    let current_page = pagination::clamp_page(page.page);
    let offset = pagination::offset(current_page, limit);

    let items = AudioRepo::list(&state.pool, scope.as_deref(), limit, offset).await?;
    let total_items = AudioRepo::count(&state.pool, scope.as_deref()).await?;

    Ok(Json(DataResponse {
        data: Paginated {
            items,
            total_items,
            total_pages: pagination::total_pages(total_items, limit),
            current_page,
        },
    }))
}

/// GET /api/v1/audios/{id}
///
/// Master keys read any record; tenant keys only their own.
pub async fn get_by_id(
    auth: AuthKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(tenant): Query<TenantParam>,
) -> AppResult<impl IntoResponse> {
    let scope = auth.read_scope(tenant.user_id)?;
    let audio = AudioRepo::find_by_id(&state.pool, id, scope.as_deref())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AudioRecord",
            id,
        }))?;
    Ok(Json(DataResponse { data: audio }))
}

/// POST /api/v1/audios
pub async fn create(
    auth: AuthKey,
    State(state): State<AppState>,
    Query(tenant): Query<TenantParam>,
    Json(input): Json<CreateAudio>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    input.validate()?;

    let audio = AudioRepo::create(&state.pool, &user_id, &input).await?;

    tracing::info!(audio_id = audio.id, %user_id, "Audio record created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: audio })))
}

/// PATCH /api/v1/audios/{id}
pub async fn update(
    auth: AuthKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(tenant): Query<TenantParam>,
    Json(input): Json<UpdateAudio>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    input.validate()?;

    if input.description.is_none() && input.audio_base64.is_none() {
        return Err(AppError::BadRequest(
            "At least one field must be provided".into(),
        ));
    }

    let audio = AudioRepo::update(&state.pool, id, &user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AudioRecord",
            id,
        }))?;

    Ok(Json(DataResponse { data: audio }))
}

/// DELETE /api/v1/audios/{id}
pub async fn delete(
    auth: AuthKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(tenant): Query<TenantParam>,
) -> AppResult<StatusCode> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    let deleted = AudioRepo::delete(&state.pool, id, &user_id).await?;
    if deleted {
        tracing::info!(audio_id = id, %user_id, "Audio record deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "AudioRecord",
            id,
        }))
    }
}
