//! Route definitions for the `/documents` resource.
//!
//! ```text
//! GET    /        -> list
//! POST   /        -> create
//! PATCH  /{id}    -> update
//! DELETE /{id}    -> delete
//! ```

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::documents;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(documents::list).post(documents::create))
        .route("/{id}", patch(documents::update).delete(documents::delete))
}
