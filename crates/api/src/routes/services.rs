//! Route definitions for the `/services` resource.
//!
//! ```text
//! GET    /        -> list
//! POST   /        -> create
//! PATCH  /{id}    -> update
//! DELETE /{id}    -> delete
//! ```

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(services::list).post(services::create))
        .route("/{id}", patch(services::update).delete(services::delete))
}
