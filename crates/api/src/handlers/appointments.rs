//! Handlers for the `/appointments` resource.
//!
//! Booking snapshots the service's current price into the appointment
//! (`service_price`); the caller may additionally fix a `final_price`.
//! Reporting later prefers those captured values over whatever the
//! service costs by then.

use agendo_core::error::CoreError;
use agendo_core::pagination;
use agendo_core::status;
use agendo_core::types::DbId;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use agendo_db::models::appointment::{CreateAppointment, UpdateAppointment};
use agendo_db::repositories::{AppointmentRepo, ClientRepo, ServiceRepo};

use crate::auth::AuthKey;
use crate::error::{AppError, AppResult};
use crate::query::{AppointmentFilterParams, PageParams, SearchParams, TenantParam};
use crate::response::{DataResponse, Paginated};
use crate::state::AppState;

/// GET /api/v1/appointments
///
/// Paginated, ordered by start time. `?search=` matches the client,
/// service, or collaborator name; `?collaborator_id=` and `?status=`
/// narrow further.
pub async fn list(
    auth: AuthKey,
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
    Query(tenant): Query<TenantParam>,
    Query(search): Query<SearchParams>,
    Query(filters): Query<AppointmentFilterParams>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;

    if let Some(status) = filters.status.as_deref() {
        if !status::is_valid(status) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown status '{status}'"
            ))));
        }
    }

    let limit = pagination::clamp_limit(page.limit);
    let current_page = pagination::clamp_page(page.page);
    let offset = pagination::offset(current_page, limit);

    let items = AppointmentRepo::list(
        &state.pool,
        &user_id,
        filters.collaborator_id,
        search.search.as_deref(),
        filters.status.as_deref(),
        limit,
        offset,
    )
    .await?;
    let total_items = AppointmentRepo::count(
        &state.pool,
        &user_id,
        filters.collaborator_id,
        search.search.as_deref(),
        filters.status.as_deref(),
    )
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

/// GET /api/v1/appointments/{id}
pub async fn get_by_id(
    auth: AuthKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(tenant): Query<TenantParam>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    let appointment = AppointmentRepo::find_by_id(&state.pool, id, &user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Appointment",
            id,
        }))?;
    Ok(Json(DataResponse { data: appointment }))
}

/// POST /api/v1/appointments
///
/// The referenced client (and service, when given) must belong to the
/// same tenant; the service's current price is captured as the booking
/// snapshot.
pub async fn create(
    auth: AuthKey,
    State(state): State<AppState>,
    Query(tenant): Query<TenantParam>,
    Json(input): Json<CreateAppointment>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    input.validate()?;

    if input.end_time <= input.start_time {
        return Err(AppError::Core(CoreError::Validation(
            "end_time must be after start_time".into(),
        )));
    }

    ClientRepo::find_by_id(&state.pool, input.client_id, &user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id: input.client_id,
        }))?;

    let service_price = match input.service_id {
        Some(service_id) => {
            let service = ServiceRepo::find_by_id(&state.pool, service_id, &user_id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Service",
                    id: service_id,
                }))?;
            service.price
        }
        None => None,
    };

    let appointment = AppointmentRepo::create(&state.pool, &user_id, &input, service_price).await?;

    tracing::info!(
        appointment_id = appointment.id,
        %user_id,
        client_id = input.client_id,
        "Appointment booked",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: appointment }),
    ))
}

/// PATCH /api/v1/appointments/{id}
///
/// Also covers status transitions (`scheduled` -> `completed`/`canceled`).
pub async fn update(
    auth: AuthKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(tenant): Query<TenantParam>,
    Json(input): Json<UpdateAppointment>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    input.validate()?;

    if let Some(new_status) = input.status.as_deref() {
        if !status::is_valid(new_status) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown status '{new_status}'"
            ))));
        }
    }

    let appointment = AppointmentRepo::update(&state.pool, id, &user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Appointment",
            id,
        }))?;

    if let Some(new_status) = input.status.as_deref() {
        tracing::info!(appointment_id = id, %user_id, status = new_status, "Appointment status changed");
    }

    Ok(Json(DataResponse { data: appointment }))
}

/// DELETE /api/v1/appointments/{id}
pub async fn delete(
    auth: AuthKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(tenant): Query<TenantParam>,
) -> AppResult<StatusCode> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    let deleted = AppointmentRepo::delete(&state.pool, id, &user_id).await?;
    if deleted {
        tracing::info!(appointment_id = id, %user_id, "Appointment deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Appointment",
            id,
        }))
    }
}
