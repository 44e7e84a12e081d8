//! Route definitions for the `/links` resource.
//!
//! ```text
//! GET    /        -> list
//! POST   /        -> create
//! PATCH  /{id}    -> update
//! DELETE /{id}    -> delete
//! ```

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::links;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(links::list).post(links::create))
        .route("/{id}", patch(links::update).delete(links::delete))
}
