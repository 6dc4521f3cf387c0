use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::Vehicle;
use crate::services::pms_service::PmsStatus;

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    pub category: String,

    pub plate_number: Option<String>,

    pub current_odometer: Option<Decimal>,

    pub tracker_device_id: Option<String>,
}

// Request para actualizar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    pub category: Option<String>,

    pub plate_number: Option<String>,

    pub tracker_device_id: Option<String>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub plate_number: Option<String>,
    pub current_odometer: Decimal,
    pub tracker_device_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            category: vehicle.category,
            plate_number: vehicle.plate_number,
            current_odometer: vehicle.current_odometer,
            tracker_device_id: vehicle.tracker_device_id,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}

/// Response de vehículo anotada con su estado de mantenimiento preventivo
#[derive(Debug, Serialize)]
pub struct VehiclePmsResponse {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub plate_number: Option<String>,
    pub current_odometer: Decimal,
    pub tracker_device_id: Option<String>,
    pub last_service_date: Option<NaiveDate>,
    pub next_due_date: Option<NaiveDate>,
    pub next_due_odometer: Option<Decimal>,
    pub pms_status: PmsStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
