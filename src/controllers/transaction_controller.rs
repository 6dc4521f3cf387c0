use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::transaction_dto::{
    CreateTransactionRequest, TransactionFilters, TransactionResponse,
};
use crate::dto::ApiResponse;
use crate::repositories::transaction_repository::TransactionRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_non_negative;

pub struct TransactionController {
    repository: TransactionRepository,
    vehicle_repository: VehicleRepository,
}

impl TransactionController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TransactionRepository::new(pool.clone()),
            vehicle_repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateTransactionRequest,
    ) -> AppResult<ApiResponse<TransactionResponse>> {
        request.validate()?;

        validate_non_negative(request.amount)
            .map_err(|_| AppError::BadRequest("El monto no puede ser negativo".to_string()))?;

        if let Some(vehicle_id) = request.vehicle_id {
            self.vehicle_repository
                .find_by_id(vehicle_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;
        }

        let transaction = self
            .repository
            .create(
                request.vehicle_id,
                request.transaction_type,
                request.amount,
                request.description,
                request.transaction_date,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            TransactionResponse::from(transaction),
            "Transacción registrada exitosamente".to_string(),
        ))
    }

    pub async fn list(&self, filters: TransactionFilters) -> AppResult<Vec<TransactionResponse>> {
        let transactions = self.repository.find_all(filters.vehicle_id).await?;
        Ok(transactions.into_iter().map(TransactionResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<TransactionResponse> {
        let transaction = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Transacción no encontrada".to_string()))?;

        Ok(TransactionResponse::from(transaction))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
