//! HTTP handlers, one module per resource.

pub mod api_keys;
pub mod appointments;
pub mod audios;
pub mod calendars;
pub mod clients;
pub mod collaborators;
pub mod documents;
pub mod links;
pub mod profile;
pub mod reports;
pub mod services;
