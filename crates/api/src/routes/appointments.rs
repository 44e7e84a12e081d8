//! Route definitions for the `/appointments` resource.
//!
//! ```text
//! GET    /        -> list
//! POST   /        -> create
//! GET    /{id}    -> get_by_id
//! PATCH  /{id}    -> update
//! DELETE /{id}    -> delete
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::appointments;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(appointments::list).post(appointments::create))
        .route(
            "/{id}",
            get(appointments::get_by_id)
                .patch(appointments::update)
                .delete(appointments::delete),
        )
}
