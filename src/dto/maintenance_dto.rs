use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::maintenance::MaintenanceRecord;

// Request para registrar un mantenimiento
//
// Si next_due_date / next_due_odometer vienen vacíos, el servidor aplica
// los defaults (+6 meses, +5000 km) al momento de crear el registro.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRequest {
    pub service_date: NaiveDate,

    pub odometer_at_service: Option<Decimal>,

    #[validate(length(min = 1, max = 500))]
    pub description: String,

    pub total_cost: Option<Decimal>,

    pub next_due_date: Option<NaiveDate>,

    pub next_due_odometer: Option<Decimal>,
}

// Response de registro de mantenimiento
#[derive(Debug, Serialize)]
pub struct MaintenanceResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub service_date: NaiveDate,
    pub odometer_at_service: Option<Decimal>,
    pub description: String,
    pub total_cost: Decimal,
    pub next_due_date: Option<NaiveDate>,
    pub next_due_odometer: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

impl From<MaintenanceRecord> for MaintenanceResponse {
    fn from(record: MaintenanceRecord) -> Self {
        Self {
            id: record.id,
            vehicle_id: record.vehicle_id,
            service_date: record.service_date,
            odometer_at_service: record.odometer_at_service,
            description: record.description,
            total_cost: record.total_cost,
            next_due_date: record.next_due_date,
            next_due_odometer: record.next_due_odometer,
            created_at: record.created_at,
        }
    }
}
