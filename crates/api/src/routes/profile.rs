//! Route definitions for the `/profile` resource.
//!
//! ```text
//! GET  /        -> get
//! PUT  /        -> save (fires a background webhook sync)
//! POST /sync    -> trigger_sync (synchronous, outcome as data)
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profile::get).put(profile::save))
        .route("/sync", post(profile::trigger_sync))
}
