//! Health check route, mounted at the root (not under `/api/v1`) and
//! served without authentication.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    database: &'static str,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = agendo_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database: if db_healthy { "up" } else { "down" },
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
