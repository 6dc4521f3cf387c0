use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::purchase_order_dto::{
    CreatePurchaseOrderRequest, PurchaseOrderResponse, UpdatePurchaseOrderRequest,
};
use crate::dto::ApiResponse;
use crate::models::purchase_order::PurchaseOrderStatus;
use crate::repositories::purchase_order_repository::PurchaseOrderRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_non_negative;

pub struct PurchaseOrderController {
    repository: PurchaseOrderRepository,
}

impl PurchaseOrderController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PurchaseOrderRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreatePurchaseOrderRequest,
    ) -> AppResult<ApiResponse<PurchaseOrderResponse>> {
        request.validate()?;

        if request.items.is_empty() {
            return Err(AppError::BadRequest(
                "La orden de compra necesita al menos un item".to_string(),
            ));
        }

        let status = match request.status.as_deref() {
            Some(raw) => PurchaseOrderStatus::from_str(raw).ok_or_else(|| {
                AppError::BadRequest(format!("Estado de orden desconocido: '{}'", raw))
            })?,
            None => PurchaseOrderStatus::Pending,
        };

        for item in &request.items {
            validate_non_negative(item.quantity).map_err(|_| {
                AppError::BadRequest("La cantidad no puede ser negativa".to_string())
            })?;
            validate_non_negative(item.unit_price).map_err(|_| {
                AppError::BadRequest("El precio unitario no puede ser negativo".to_string())
            })?;
        }

        let items = request
            .items
            .into_iter()
            .map(|i| (i.description, i.quantity, i.unit_price))
            .collect();

        let (order, inserted_items) = self
            .repository
            .create(request.supplier, request.order_date, status.as_str().to_string(), items)
            .await?;

        Ok(ApiResponse::success_with_message(
            PurchaseOrderResponse::from_parts(order, inserted_items),
            "Orden de compra creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<PurchaseOrderResponse> {
        let (order, items) = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Orden de compra no encontrada".to_string()))?;

        Ok(PurchaseOrderResponse::from_parts(order, items))
    }

    pub async fn list(&self) -> AppResult<Vec<PurchaseOrderResponse>> {
        let orders = self.repository.find_all().await?;
        Ok(orders
            .into_iter()
            .map(|(order, items)| PurchaseOrderResponse::from_parts(order, items))
            .collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdatePurchaseOrderRequest,
    ) -> AppResult<ApiResponse<PurchaseOrderResponse>> {
        request.validate()?;

        if let Some(raw) = &request.status {
            PurchaseOrderStatus::from_str(raw).ok_or_else(|| {
                AppError::BadRequest(format!("Estado de orden desconocido: '{}'", raw))
            })?;
        }

        let order = self
            .repository
            .update(id, request.supplier, request.order_date, request.status)
            .await?;

        // Releer con items para la response completa
        let (order, items) = self
            .repository
            .find_by_id(order.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Orden de compra no encontrada".to_string()))?;

        Ok(ApiResponse::success_with_message(
            PurchaseOrderResponse::from_parts(order, items),
            "Orden de compra actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
