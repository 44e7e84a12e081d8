//! Route definitions for the `/reports` resource.
//!
//! ```text
//! GET /revenue        -> revenue (daily + monthly series)
//! GET /top-clients    -> top_clients
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/revenue", get(reports::revenue))
        .route("/top-clients", get(reports::top_clients))
}
