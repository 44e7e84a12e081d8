//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Tenant scoping is part of
//! every statement: updates and deletes filter `id AND user_id` in the
//! mutation itself, so the ownership check and the write are one atomic
//! statement.

pub mod api_key_repo;
pub mod appointment_repo;
pub mod audio_repo;
pub mod calendar_repo;
pub mod client_repo;
pub mod collaborator_repo;
pub mod document_repo;
pub mod instance_repo;
pub mod link_repo;
pub mod profile_repo;
pub mod report_repo;
pub mod service_repo;

pub use api_key_repo::ApiKeyRepo;
pub use appointment_repo::AppointmentRepo;
pub use audio_repo::AudioRepo;
pub use calendar_repo::CalendarRepo;
pub use client_repo::ClientRepo;
pub use collaborator_repo::CollaboratorRepo;
pub use document_repo::DocumentRepo;
pub use instance_repo::InstanceRepo;
pub use link_repo::LinkRepo;
pub use profile_repo::ProfileRepo;
pub use report_repo::ReportRepo;
pub use service_repo::ServiceRepo;
