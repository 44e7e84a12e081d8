//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod api_key;
pub mod appointment;
pub mod audio;
pub mod calendar;
pub mod client;
pub mod collaborator;
pub mod document;
pub mod instance;
pub mod link;
pub mod profile;
pub mod report;
pub mod service;
