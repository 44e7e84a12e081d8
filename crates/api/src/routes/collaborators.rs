//! Route definitions for the `/collaborators` resource.
//!
//! ```text
//! GET    /        -> list
//! POST   /        -> create
//! PATCH  /{id}    -> update
//! DELETE /{id}    -> delete
//! ```

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::collaborators;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(collaborators::list).post(collaborators::create))
        .route(
            "/{id}",
            patch(collaborators::update).delete(collaborators::delete),
        )
}
