use axum::{
    extract::{Path, State},
    middleware,
    routing::get,
    Json, Router,
};

use crate::middleware::auth::auth_middleware;
use crate::services::traccar_service::{TraccarDevice, TraccarPosition, TraccarService};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Proxy de solo lectura hacia el servidor GPS Traccar
pub fn create_gps_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/devices", get(get_devices))
        .route("/positions/:device_id", get(get_positions))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn get_devices(
    State(state): State<AppState>,
) -> Result<Json<Vec<TraccarDevice>>, AppError> {
    let service = TraccarService::from_config(state.http_client.clone(), &state.config)?;
    let devices = service.get_devices().await?;
    Ok(Json(devices))
}

async fn get_positions(
    State(state): State<AppState>,
    Path(device_id): Path<i64>,
) -> Result<Json<Vec<TraccarPosition>>, AppError> {
    let service = TraccarService::from_config(state.http_client.clone(), &state.config)?;
    let positions = service.get_positions(device_id).await?;
    Ok(Json(positions))
}
