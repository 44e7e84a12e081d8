//! Route definitions for the `/calendars` resource.
//!
//! The static `/instance/appointments` path is registered alongside the
//! `/{id}` routes; static segments win over captures.
//!
//! ```text
//! GET    /                         -> list
//! POST   /                         -> create
//! PATCH  /{id}                     -> update
//! DELETE /{id}                     -> delete
//! GET    /{id}/appointments        -> day_view
//! GET    /instance/appointments    -> instance_day_view
//! ```

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::calendars;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(calendars::list).post(calendars::create))
        .route("/{id}", patch(calendars::update).delete(calendars::delete))
        .route("/{id}/appointments", get(calendars::day_view))
        .route("/instance/appointments", get(calendars::instance_day_view))
}
