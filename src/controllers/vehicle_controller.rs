use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;
use validator::Validate;

use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehiclePmsResponse, VehicleResponse,
};
use crate::dto::ApiResponse;
use crate::models::maintenance::LatestMaintenance;
use crate::models::vehicle::{Vehicle, VehicleCategory};
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::pms_service::{self, PmsDueInfo};
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::{validate_non_negative, validate_plate_number};

pub struct VehicleController {
    repository: VehicleRepository,
    maintenance_repository: MaintenanceRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            maintenance_repository: MaintenanceRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        request.validate()?;

        let category = VehicleCategory::from_str(&request.category).ok_or_else(|| {
            AppError::BadRequest(format!("Categoría desconocida: '{}'", request.category))
        })?;

        if let Some(plate) = &request.plate_number {
            validate_plate_number(plate)
                .map_err(|_| AppError::BadRequest(format!("Formato de placa inválido: '{}'", plate)))?;

            if self.repository.plate_exists(plate).await? {
                return Err(AppError::Conflict(format!(
                    "La placa '{}' ya está registrada",
                    plate
                )));
            }
        }

        let current_odometer = request.current_odometer.unwrap_or(Decimal::ZERO);
        validate_non_negative(current_odometer)
            .map_err(|_| AppError::BadRequest("El odómetro no puede ser negativo".to_string()))?;

        let vehicle = self
            .repository
            .create(
                request.name,
                category.as_str().to_string(),
                request.plate_number,
                current_odometer,
                request.tracker_device_id,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<VehicleResponse> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(VehicleResponse::from(vehicle))
    }

    /// Listado completo anotado con el estado PMS de cada vehículo
    pub async fn list_with_pms(&self) -> AppResult<Vec<VehiclePmsResponse>> {
        let vehicles = self.repository.find_all().await?;
        let latest = self.maintenance_repository.latest_per_vehicle().await?;

        let mut latest_map: HashMap<Uuid, LatestMaintenance> =
            latest.into_iter().map(|l| (l.vehicle_id, l)).collect();

        let today = Utc::now().date_naive();

        Ok(vehicles
            .into_iter()
            .map(|vehicle| {
                let latest = latest_map.remove(&vehicle.id);
                annotate_vehicle(vehicle, latest, today)
            })
            .collect())
    }

    /// Solo los vehículos con mantenimiento vencido o por vencer
    pub async fn reminders(&self) -> AppResult<Vec<VehiclePmsResponse>> {
        let annotated = self.list_with_pms().await?;
        Ok(annotated
            .into_iter()
            .filter(|v| pms_service::is_reminder(v.pms_status))
            .collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        request.validate()?;

        if let Some(raw) = &request.category {
            VehicleCategory::from_str(raw).ok_or_else(|| {
                AppError::BadRequest(format!("Categoría desconocida: '{}'", raw))
            })?;
        }

        if let Some(plate) = &request.plate_number {
            validate_plate_number(plate)
                .map_err(|_| AppError::BadRequest(format!("Formato de placa inválido: '{}'", plate)))?;
        }

        let vehicle = self
            .repository
            .update(
                id,
                request.name,
                request.category,
                request.plate_number,
                request.tracker_device_id,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

/// Combina un vehículo con su último registro de mantenimiento y computa
/// el estado PMS
fn annotate_vehicle(
    vehicle: Vehicle,
    latest: Option<LatestMaintenance>,
    today: chrono::NaiveDate,
) -> VehiclePmsResponse {
    let due = latest.as_ref().map(|l| PmsDueInfo {
        next_due_date: l.next_due_date,
        next_due_odometer: l.next_due_odometer,
    });

    let pms_status = pms_service::evaluate(vehicle.current_odometer, due.as_ref(), today);

    VehiclePmsResponse {
        id: vehicle.id,
        name: vehicle.name,
        category: vehicle.category,
        plate_number: vehicle.plate_number,
        current_odometer: vehicle.current_odometer,
        tracker_device_id: vehicle.tracker_device_id,
        last_service_date: latest.as_ref().map(|l| l.service_date),
        next_due_date: latest.as_ref().and_then(|l| l.next_due_date),
        next_due_odometer: latest.as_ref().and_then(|l| l.next_due_odometer),
        pms_status,
        created_at: vehicle.created_at,
        updated_at: vehicle.updated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn test_vehicle(odometer: i64) -> Vehicle {
        Vehicle {
            id: Uuid::new_v4(),
            name: "Dump Truck 01".to_string(),
            category: "dump_truck".to_string(),
            plate_number: Some("ABC-1234".to_string()),
            current_odometer: Decimal::from(odometer),
            tracker_device_id: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_annotate_vehicle_without_maintenance_is_ok() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let annotated = annotate_vehicle(test_vehicle(10000), None, today);
        assert_eq!(annotated.pms_status, pms_service::PmsStatus::Ok);
        assert!(annotated.last_service_date.is_none());
        assert!(annotated.next_due_date.is_none());
    }

    #[test]
    fn test_annotate_vehicle_merges_due_fields() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let vehicle = test_vehicle(10000);
        let latest = LatestMaintenance {
            vehicle_id: vehicle.id,
            service_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            next_due_date: Some(NaiveDate::from_ymd_opt(2025, 5, 15).unwrap()),
            next_due_odometer: Some(Decimal::from(15000)),
        };
        let annotated = annotate_vehicle(vehicle, Some(latest), today);
        assert_eq!(annotated.pms_status, pms_service::PmsStatus::Overdue);
        assert_eq!(
            annotated.last_service_date,
            Some(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap())
        );
        assert_eq!(annotated.next_due_odometer, Some(Decimal::from(15000)));
    }
}
