use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::purchase_order_controller::PurchaseOrderController;
use crate::dto::purchase_order_dto::{
    CreatePurchaseOrderRequest, PurchaseOrderResponse, UpdatePurchaseOrderRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::auth_middleware;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_purchase_order_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_order).get(list_orders))
        .route("/:id", get(get_order).put(update_order).delete(delete_order))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreatePurchaseOrderRequest>,
) -> Result<Json<ApiResponse<PurchaseOrderResponse>>, AppError> {
    let controller = PurchaseOrderController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<PurchaseOrderResponse>>, AppError> {
    let controller = PurchaseOrderController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PurchaseOrderResponse>, AppError> {
    let controller = PurchaseOrderController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePurchaseOrderRequest>,
) -> Result<Json<ApiResponse<PurchaseOrderResponse>>, AppError> {
    let controller = PurchaseOrderController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = PurchaseOrderController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Orden de compra eliminada exitosamente"
    })))
}
