//! Route definitions for the `/audios` resource.
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

use crate::handlers::audios;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(audios::list).post(audios::create))
        .route(
            "/{id}",
            get(audios::get_by_id)
                .patch(audios::update)
                .delete(audios::delete),
        )
}
