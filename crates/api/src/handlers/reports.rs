//! Handlers for the `/reports` resource.

use agendo_core::revenue::{self, RevenueRow};
use agendo_core::time::range_bounds;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use agendo_db::repositories::ReportRepo;

use crate::auth::AuthKey;
use crate::error::AppResult;
use crate::query::{DateRangeParams, RankingParams, TenantParam};
use crate::response::DataResponse;
use crate::state::AppState;

/// Default and maximum size of the top-clients ranking.
const DEFAULT_RANKING_LIMIT: i64 = 10;
const MAX_RANKING_LIMIT: i64 = 50;

/// GET /api/v1/reports/revenue?from=YYYY-MM-DD&to=YYYY-MM-DD
///
/// Daily and monthly revenue of scheduled appointments ending in the
/// range, using booking-time prices where captured.
pub async fn revenue(
    auth: AuthKey,
    State(state): State<AppState>,
    Query(tenant): Query<TenantParam>,
    Query(range): Query<DateRangeParams>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    let (start, end) = range_bounds(range.from, range.to);

    let rows = ReportRepo::revenue_rows(&state.pool, &user_id, start, end).await?;
    let rows: Vec<RevenueRow> = rows
        .into_iter()
        .map(|r| RevenueRow {
            end_time: r.end_time,
            status: r.status,
            final_price: r.final_price,
            service_price: r.service_price,
            service_base_price: r.service_base_price,
        })
        .collect();

    let report = revenue::aggregate_revenue(&rows);

    Ok(Json(DataResponse { data: report }))
}

/// GET /api/v1/reports/top-clients?from=&to=&limit=
pub async fn top_clients(
    auth: AuthKey,
    State(state): State<AppState>,
    Query(tenant): Query<TenantParam>,
    Query(range): Query<DateRangeParams>,
    Query(ranking): Query<RankingParams>,
) -> AppResult<impl IntoResponse> {
    let user_id = auth.require_tenant(tenant.user_id)?;
    let (start, end) = range_bounds(range.from, range.to);
    let limit = ranking
        .limit
        .unwrap_or(DEFAULT_RANKING_LIMIT)
        .clamp(1, MAX_RANKING_LIMIT);

    let clients = ReportRepo::top_clients(&state.pool, &user_id, start, end, limit).await?;

    Ok(Json(DataResponse { data: clients }))
}
