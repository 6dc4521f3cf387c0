//! Modelo de OdometerLog
//!
//! Bitácora append-only de lecturas de odómetro. Cada inserción actualiza
//! también el campo denormalizado current_odometer del vehículo.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Origen de una lectura de odómetro
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OdometerSource {
    Manual,
    Gps,
    Service,
}

impl OdometerSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            OdometerSource::Manual => "manual",
            OdometerSource::Gps => "gps",
            OdometerSource::Service => "service",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "manual" => Some(OdometerSource::Manual),
            "gps" => Some(OdometerSource::Gps),
            "service" => Some(OdometerSource::Service),
            _ => None,
        }
    }
}

/// OdometerLog - mapea exactamente a la tabla odometer_logs
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OdometerLog {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub reading: Decimal,
    pub source: String,
    pub logged_at: DateTime<Utc>,
}
