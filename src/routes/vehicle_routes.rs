use axum::{
    extract::{Path, State},
    middleware,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::maintenance_controller::MaintenanceController;
use crate::controllers::odometer_controller::OdometerController;
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::maintenance_dto::{CreateMaintenanceRequest, MaintenanceResponse};
use crate::dto::odometer_dto::{
    AppendOdometerResponse, CreateOdometerLogRequest, OdometerLogResponse,
};
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehiclePmsResponse, VehicleResponse,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::auth_middleware;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle).get(list_vehicles))
        .route("/reminders", get(pms_reminders))
        .route(
            "/:id",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
        .route("/:id/maintenance", post(create_maintenance).get(list_maintenance))
        .route("/:id/odometer", post(append_odometer).get(list_odometer))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

/// Listado de vehículos anotados con pms_status
async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehiclePmsResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list_with_pms().await?;
    Ok(Json(response))
}

/// Vehículos con mantenimiento vencido o por vencer
async fn pms_reminders(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehiclePmsResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.reminders().await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Vehículo eliminado exitosamente"
    })))
}

async fn create_maintenance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateMaintenanceRequest>,
) -> Result<Json<ApiResponse<MaintenanceResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.create(id, request).await?;
    Ok(Json(response))
}

async fn list_maintenance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<MaintenanceResponse>>, AppError> {
    let controller = MaintenanceController::new(state.pool.clone());
    let response = controller.list_by_vehicle(id).await?;
    Ok(Json(response))
}

async fn append_odometer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateOdometerLogRequest>,
) -> Result<Json<ApiResponse<AppendOdometerResponse>>, AppError> {
    let controller = OdometerController::new(state.pool.clone());
    let response = controller.append(id, request).await?;
    Ok(Json(response))
}

async fn list_odometer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<OdometerLogResponse>>, AppError> {
    let controller = OdometerController::new(state.pool.clone());
    let response = controller.list_by_vehicle(id).await?;
    Ok(Json(response))
}
