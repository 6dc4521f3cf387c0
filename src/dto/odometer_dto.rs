use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::odometer::OdometerLog;

// Request para registrar una lectura de odómetro
//
// `reading` acepta número o string; valores no numéricos colapsan a 0
// (sustitución permisiva heredada del sistema original).
#[derive(Debug, Deserialize)]
pub struct CreateOdometerLogRequest {
    pub reading: serde_json::Value,
    pub source: Option<String>,
}

// Response de lectura de odómetro
#[derive(Debug, Serialize)]
pub struct OdometerLogResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub reading: Decimal,
    pub source: String,
    pub logged_at: DateTime<Utc>,
}

impl From<OdometerLog> for OdometerLogResponse {
    fn from(log: OdometerLog) -> Self {
        Self {
            id: log.id,
            vehicle_id: log.vehicle_id,
            reading: log.reading,
            source: log.source,
            logged_at: log.logged_at,
        }
    }
}

/// Response del registro de lectura: el log insertado y el odómetro
/// actualizado del vehículo
#[derive(Debug, Serialize)]
pub struct AppendOdometerResponse {
    pub log: OdometerLogResponse,
    pub current_odometer: Decimal,
}
