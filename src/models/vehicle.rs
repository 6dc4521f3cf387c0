//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus variantes para CRUD operations.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Categorías de vehículo del sistema
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum VehicleCategory {
    DumpTruck,
    MiniDump,
    Backhoe,
    BoomTruck,
    Loader,
}

impl VehicleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::DumpTruck => "dump_truck",
            VehicleCategory::MiniDump => "mini_dump",
            VehicleCategory::Backhoe => "backhoe",
            VehicleCategory::BoomTruck => "boom_truck",
            VehicleCategory::Loader => "loader",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "dump_truck" => Some(VehicleCategory::DumpTruck),
            "mini_dump" => Some(VehicleCategory::MiniDump),
            "backhoe" => Some(VehicleCategory::Backhoe),
            "boom_truck" => Some(VehicleCategory::BoomTruck),
            "loader" => Some(VehicleCategory::Loader),
            _ => None,
        }
    }
}

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub plate_number: Option<String>,
    pub current_odometer: Decimal,
    pub tracker_device_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for cat in [
            VehicleCategory::DumpTruck,
            VehicleCategory::MiniDump,
            VehicleCategory::Backhoe,
            VehicleCategory::BoomTruck,
            VehicleCategory::Loader,
        ] {
            assert_eq!(VehicleCategory::from_str(cat.as_str()), Some(cat));
        }
        assert_eq!(VehicleCategory::from_str("bulldozer"), None);
    }
}
