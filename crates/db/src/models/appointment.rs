//! Appointment models and DTOs.

use agendo_core::types::{DbId, TenantId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `appointments` table.
///
/// `service_price` is snapshotted from the service at booking time and
/// `final_price` is an explicit per-booking override; reporting prefers
/// them (in that order) over the service's current price.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Appointment {
    pub id: DbId,
    pub user_id: TenantId,
    pub client_id: DbId,
    pub service_id: Option<DbId>,
    pub collaborator_id: Option<DbId>,
    pub calendar_id: Option<DbId>,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub status: String,
    pub final_price: Option<f64>,
    pub service_price: Option<f64>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An appointment joined with the names of its references, for list and
/// day views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AppointmentDetail {
    pub id: DbId,
    pub user_id: TenantId,
    pub client_id: DbId,
    pub service_id: Option<DbId>,
    pub collaborator_id: Option<DbId>,
    pub calendar_id: Option<DbId>,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub status: String,
    pub final_price: Option<f64>,
    pub service_price: Option<f64>,
    pub notes: Option<String>,
    pub client_name: Option<String>,
    pub client_phone: Option<String>,
    pub service_name: Option<String>,
    pub collaborator_name: Option<String>,
    pub calendar_name: Option<String>,
}

/// DTO for booking an appointment.
///
/// The service's current price is snapshotted into `service_price` by the
/// handler; callers may additionally fix a `final_price` override.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAppointment {
    pub client_id: DbId,
    pub service_id: Option<DbId>,
    pub collaborator_id: Option<DbId>,
    pub calendar_id: Option<DbId>,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    #[validate(range(min = 0.0))]
    pub final_price: Option<f64>,
    pub notes: Option<String>,
}

/// DTO for updating an appointment, including status transitions.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAppointment {
    pub client_id: Option<DbId>,
    pub service_id: Option<DbId>,
    pub collaborator_id: Option<DbId>,
    pub calendar_id: Option<DbId>,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    pub status: Option<String>,
    #[validate(range(min = 0.0))]
    pub final_price: Option<f64>,
    pub notes: Option<String>,
}
