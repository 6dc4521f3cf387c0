use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::odometer_dto::{
    AppendOdometerResponse, CreateOdometerLogRequest, OdometerLogResponse,
};
use crate::dto::ApiResponse;
use crate::models::odometer::OdometerSource;
use crate::repositories::odometer_repository::OdometerRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::pms_service;
use crate::utils::errors::{AppError, AppResult};

pub struct OdometerController {
    repository: OdometerRepository,
    vehicle_repository: VehicleRepository,
}

impl OdometerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: OdometerRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool),
        }
    }

    /// Apendiza una lectura de odómetro. La lectura pasa por la sustitución
    /// permisiva (no numérico -> 0) y la actualización del vehículo es
    /// incondicional: una lectura menor a la anterior se acepta tal cual.
    pub async fn append(
        &self,
        vehicle_id: Uuid,
        request: CreateOdometerLogRequest,
    ) -> AppResult<ApiResponse<AppendOdometerResponse>> {
        self.vehicle_repository
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let reading = pms_service::odometer_or_zero(&request.reading);

        let source = match request.source.as_deref() {
            Some(raw) => OdometerSource::from_str(raw).ok_or_else(|| {
                AppError::BadRequest(format!("Origen de lectura desconocido: '{}'", raw))
            })?,
            None => OdometerSource::Manual,
        };

        let (log, current_odometer) = self
            .repository
            .append(vehicle_id, reading, source.as_str())
            .await?;

        Ok(ApiResponse::success_with_message(
            AppendOdometerResponse {
                log: OdometerLogResponse::from(log),
                current_odometer,
            },
            "Lectura registrada exitosamente".to_string(),
        ))
    }

    pub async fn list_by_vehicle(&self, vehicle_id: Uuid) -> AppResult<Vec<OdometerLogResponse>> {
        self.vehicle_repository
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let logs = self.repository.find_by_vehicle(vehicle_id).await?;
        Ok(logs.into_iter().map(OdometerLogResponse::from).collect())
    }
}
