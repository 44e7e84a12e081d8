pub mod api_keys;
pub mod appointments;
pub mod audios;
pub mod calendars;
pub mod clients;
pub mod collaborators;
pub mod documents;
pub mod health;
pub mod links;
pub mod profile;
pub mod reports;
pub mod services;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /clients                            list, create
/// /clients/{id}                       get, update, delete
///
/// /services                           list, create
/// /services/{id}                      update, delete
///
/// /collaborators                      list, create
/// /collaborators/{id}                 update, delete
///
/// /calendars                          list, create
/// /calendars/{id}                     update, delete
/// /calendars/{id}/appointments        day view (GET)
/// /calendars/instance/appointments    instance-scoped day view (GET)
///
/// /appointments                       list, create
/// /appointments/{id}                  get, update, delete
///
/// /links                              list, create
/// /links/{id}                         update, delete
///
/// /documents                          list, create
/// /documents/{id}                     update, delete
///
/// /audios                             list, create
/// /audios/{id}                        get, update, delete
///
/// /profile                            get, save (PUT)
/// /profile/sync                       trigger webhook sync (POST)
///
/// /reports/revenue                    daily + monthly revenue (GET)
/// /reports/top-clients                client ranking (GET)
///
/// /api-keys                           list, create (master key only)
/// /api-keys/{id}                      delete (master key only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/clients", clients::router())
        .nest("/services", services::router())
        .nest("/collaborators", collaborators::router())
        .nest("/calendars", calendars::router())
        .nest("/appointments", appointments::router())
        .nest("/links", links::router())
        .nest("/documents", documents::router())
        .nest("/audios", audios::router())
        .nest("/profile", profile::router())
        .nest("/reports", reports::router())
        .nest("/api-keys", api_keys::router())
}
