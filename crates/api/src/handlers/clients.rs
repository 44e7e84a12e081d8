//! Handlers for the `/clients` resource.

use agendo_core::error::CoreError;
use agendo_core::pagination;
use agendo_core::types::DbId;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use agendo_db::models::client::{CreateClient, UpdateClient};
use agendo_db::repositories::ClientRepo;

use crate::auth::AuthKey;
use crate::error::{AppError, AppResult};
use crate::query::{PageParams, SearchParams, TenantParam};
use crate::response::{DataResponse, Paginated};
use crate::state::AppState;

/// GET /api/v1/clients
///
/// Paginated, optionally filtered by `?search=` on the full name. Master
/// keys may list across tenants or impersonate via `?userId=`.
pub async fn list(
    auth: AuthKey,
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
    Query(tenant): Query<TenantParam>,
    Query(search): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let scope = auth.read_scope(tenant.user_id)?;
    let limit = pagination::clamp_limit(page.limit);
    let current_page = pagination::clamp_page(page.page);
    let offset = pagination::offset(current_page, limit);

    let items = ClientRepo::list(
        &state.pool,
        scope.as_deref(),
        search.search.as_deref(),
        limit,
        offset,
    )
    .await?;
    let total_items = ClientRepo::count(&state.pool, scope.as_deref(), search.search.as_deref())
        .await?;

    Ok(Json(DataResponse {
        data: Paginated {
            items,
            total_items,
            total_pages: pagination::total_pages(total_items, limit),
            current_page,
        },
    }))
}

/// GET /api/v1/clients/{id}
pub async fn get_by_id(
    auth: AuthKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(tenant): Query<TenantParam>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    let client = ClientRepo::find_by_id(&state.pool, id, &user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(DataResponse { data: client }))
}

/// POST /api/v1/clients
pub async fn create(
    auth: AuthKey,
    State(state): State<AppState>,
    Query(tenant): Query<TenantParam>,
    Json(input): Json<CreateClient>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    input.validate()?;

    let client = ClientRepo::create(&state.pool, &user_id, &input).await?;

    tracing::info!(client_id = client.id, %user_id, "Client created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: client })))
}

/// PATCH /api/v1/clients/{id}
pub async fn update(
    auth: AuthKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(tenant): Query<TenantParam>,
    Json(input): Json<UpdateClient>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    input.validate()?;

    let client = ClientRepo::update(&state.pool, id, &user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;

    Ok(Json(DataResponse { data: client }))
}

/// DELETE /api/v1/clients/{id}
pub async fn delete(
    auth: AuthKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(tenant): Query<TenantParam>,
) -> AppResult<StatusCode> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    let deleted = ClientRepo::delete(&state.pool, id, &user_id).await?;
    if deleted {
        tracing::info!(client_id = id, %user_id, "Client deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))
    }
}
