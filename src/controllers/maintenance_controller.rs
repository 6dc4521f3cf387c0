use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::maintenance_dto::{CreateMaintenanceRequest, MaintenanceResponse};
use crate::dto::ApiResponse;
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::pms_service;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_non_negative;

pub struct MaintenanceController {
    repository: MaintenanceRepository,
    vehicle_repository: VehicleRepository,
}

impl MaintenanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MaintenanceRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool),
        }
    }

    /// Registra un mantenimiento. Los campos de próximo vencimiento que no
    /// vengan en el request se completan con los defaults (+6 meses, +5000 km)
    /// y quedan almacenados; no se recalculan en lecturas posteriores.
    pub async fn create(
        &self,
        vehicle_id: Uuid,
        request: CreateMaintenanceRequest,
    ) -> AppResult<ApiResponse<MaintenanceResponse>> {
        request.validate()?;

        self.vehicle_repository
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let total_cost = request.total_cost.unwrap_or(Decimal::ZERO);
        validate_non_negative(total_cost)
            .map_err(|_| AppError::BadRequest("El costo no puede ser negativo".to_string()))?;

        if let Some(odometer) = request.odometer_at_service {
            validate_non_negative(odometer).map_err(|_| {
                AppError::BadRequest("El odómetro del servicio no puede ser negativo".to_string())
            })?;
        }

        let next_due_date = request
            .next_due_date
            .or_else(|| Some(pms_service::default_next_due_date(request.service_date)));

        // El default de odómetro solo aplica si el servicio registró lectura
        let next_due_odometer = request.next_due_odometer.or_else(|| {
            request
                .odometer_at_service
                .map(pms_service::default_next_due_odometer)
        });

        let record = self
            .repository
            .create(
                vehicle_id,
                request.service_date,
                request.odometer_at_service,
                request.description,
                total_cost,
                next_due_date,
                next_due_odometer,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            MaintenanceResponse::from(record),
            "Mantenimiento registrado exitosamente".to_string(),
        ))
    }

    pub async fn list_by_vehicle(&self, vehicle_id: Uuid) -> AppResult<Vec<MaintenanceResponse>> {
        self.vehicle_repository
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let records = self.repository.find_by_vehicle(vehicle_id).await?;
        Ok(records.into_iter().map(MaintenanceResponse::from).collect())
    }
}
