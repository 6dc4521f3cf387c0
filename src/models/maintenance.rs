//! Modelo de MaintenanceRecord
//!
//! Registros de mantenimiento por vehículo. Los registros son inmutables
//! una vez creados; el "último" registro de un vehículo se define por
//! (service_date, created_at, id) descendente.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// MaintenanceRecord - mapea exactamente a la tabla maintenance_records
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MaintenanceRecord {
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

/// Proyección del último registro de mantenimiento por vehículo
/// (consulta DISTINCT ON en el repositorio)
#[derive(Debug, Clone, FromRow)]
pub struct LatestMaintenance {
    pub vehicle_id: Uuid,
    pub service_date: NaiveDate,
    pub next_due_date: Option<NaiveDate>,
    pub next_due_odometer: Option<Decimal>,
}
