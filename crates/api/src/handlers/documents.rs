//! Handlers for the `/documents` resource. Rows reference externally
//! stored files; upload mechanics live elsewhere.

use agendo_core::error::CoreError;
use agendo_core::pagination;
use agendo_core::types::DbId;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use agendo_db::models::document::{CreateDocument, UpdateDocument};
use agendo_db::repositories::DocumentRepo;

use crate::auth::AuthKey;
use crate::error::{AppError, AppResult};
use crate::query::{PageParams, TenantParam};
use crate::response::{DataResponse, Paginated};
use crate::state::AppState;

/// GET /api/v1/documents
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

    let items = DocumentRepo::list(&state.pool, scope.as_deref(), limit, offset).await?;
    let total_items = DocumentRepo::count(&state.pool, scope.as_deref()).await?;

    Ok(Json(DataResponse {
        data: Paginated {
            items,
            total_items,
            total_pages: pagination::total_pages(total_items, limit),
            current_page,
        },
    }))
}

/// POST /api/v1/documents
pub async fn create(
    auth: AuthKey,
    State(state): State<AppState>,
    Query(tenant): Query<TenantParam>,
    Json(input): Json<CreateDocument>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    input.validate()?;

    let document = DocumentRepo::create(&state.pool, &user_id, &input).await?;

    tracing::info!(document_id = document.id, %user_id, "Document record created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: document })))
}

/// PATCH /api/v1/documents/{id}
pub async fn update(
    auth: AuthKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(tenant): Query<TenantParam>,
    Json(input): Json<UpdateDocument>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    input.validate()?;

    let document = DocumentRepo::update(&state.pool, id, &user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Document",
            id,
        }))?;

    Ok(Json(DataResponse { data: document }))
}

/// DELETE /api/v1/documents/{id}
pub async fn delete(
    auth: AuthKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(tenant): Query<TenantParam>,
) -> AppResult<StatusCode> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    let deleted = DocumentRepo::delete(&state.pool, id, &user_id).await?;
    if deleted {
        tracing::info!(document_id = id, %user_id, "Document record deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Document",
            id,
        }))
    }
}
