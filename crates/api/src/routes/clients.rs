//! Route definitions for the `/clients` resource.
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

use crate::handlers::clients;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(clients::list).post(clients::create))
        .route(
            "/{id}",
            get(clients::get_by_id)
                .patch(clients::update)
                .delete(clients::delete),
        )
}
