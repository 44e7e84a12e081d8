//! Handlers for the `/calendars` resource, including the day views.

use agendo_core::error::CoreError;
use agendo_core::schedule_text::{self, ScheduleEntry};
use agendo_core::time::day_bounds;
use agendo_core::types::DbId;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use agendo_db::models::appointment::AppointmentDetail;
use agendo_db::models::calendar::{CreateCalendar, UpdateCalendar};
use agendo_db::repositories::{AppointmentRepo, CalendarRepo, InstanceRepo};

use crate::auth::AuthKey;
use crate::error::{AppError, AppResult};
use crate::query::{DateParam, IncludeInactiveParams, InstanceDayParams, TenantParam};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/calendars
pub async fn list(
    auth: AuthKey,
    State(state): State<AppState>,
    Query(tenant): Query<TenantParam>,
    Query(flags): Query<IncludeInactiveParams>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    let calendars = CalendarRepo::list(&state.pool, &user_id, flags.include_inactive).await?;
    Ok(Json(DataResponse { data: calendars }))
}

/// POST /api/v1/calendars
pub async fn create(
    auth: AuthKey,
    State(state): State<AppState>,
    Query(tenant): Query<TenantParam>,
    Json(input): Json<CreateCalendar>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    input.validate()?;

    let calendar = CalendarRepo::create(&state.pool, &user_id, &input).await?;

    tracing::info!(calendar_id = calendar.id, %user_id, "Calendar created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: calendar })))
}

/// PATCH /api/v1/calendars/{id}
pub async fn update(
    auth: AuthKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(tenant): Query<TenantParam>,
    Json(input): Json<UpdateCalendar>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    input.validate()?;

    let calendar = CalendarRepo::update(&state.pool, id, &user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Calendar",
            id,
        }))?;

    Ok(Json(DataResponse { data: calendar }))
}

/// DELETE /api/v1/calendars/{id}
pub async fn delete(
    auth: AuthKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(tenant): Query<TenantParam>,
) -> AppResult<StatusCode> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    let deleted = CalendarRepo::delete(&state.pool, id, &user_id).await?;
    if deleted {
        tracing::info!(calendar_id = id, %user_id, "Calendar deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Calendar",
            id,
        }))
    }
}

/// GET /api/v1/calendars/{id}/appointments?date=YYYY-MM-DD
///
/// Scheduled appointments of one calendar for one day. The calendar is
/// looked up under the caller's tenant first; a calendar owned by someone
/// else is indistinguishable from a missing one.
pub async fn day_view(
    auth: AuthKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(tenant): Query<TenantParam>,
    Query(date): Query<DateParam>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;

    CalendarRepo::find_by_id(&state.pool, id, &user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Calendar",
            id,
        }))?;

    let (start, end) = day_bounds(date.date);
    let appointments = AppointmentRepo::list_for_day(&state.pool, id, start, end).await?;

    Ok(Json(DataResponse { data: appointments }))
}

/// Response of the instance-scoped day view: raw rows plus a plain-text
/// rendering for the assistant to read back.
#[derive(Debug, Serialize)]
pub struct InstanceDayView {
    pub appointments: Vec<AppointmentDetail>,
    pub formatted: String,
}

/// GET /api/v1/calendars/instance/appointments?instance=&date=&calendarId=
///
/// Resolves the tenant through the named messaging instance; any valid
/// API key may call this.
pub async fn instance_day_view(
    _auth: AuthKey,
    State(state): State<AppState>,
    Query(params): Query<InstanceDayParams>,
) -> AppResult<impl IntoResponse> {
    let instance = InstanceRepo::find_by_name(&state.pool, &params.instance)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Instance '{}' not found", params.instance)))?;

    let (start, end) = day_bounds(params.date);
    let appointments = AppointmentRepo::list_for_instance_day(
        &state.pool,
        &instance.user_id,
        start,
        end,
        params.calendar_id,
    )
    .await?;

    let entries: Vec<ScheduleEntry> = appointments
        .iter()
        .map(|a| ScheduleEntry {
            start_time: a.start_time,
            client_name: a.client_name.clone(),
            client_phone: a.client_phone.clone(),
            service_name: a.service_name.clone(),
            collaborator_name: a.collaborator_name.clone(),
            notes: a.notes.clone(),
        })
        .collect();

    let calendar_name = match params.calendar_id {
        Some(_) => Some(
            appointments
                .first()
                .and_then(|a| a.calendar_name.as_deref())
                .unwrap_or("unnamed"),
        ),
        None => None,
    };

    let formatted = schedule_text::render_day_schedule(
        &entries,
        &params.date.format("%d/%m/%Y").to_string(),
        calendar_name,
    );

    Ok(Json(DataResponse {
        data: InstanceDayView {
            appointments,
            formatted,
        },
    }))
}
