mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::cors_middleware;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚚 Fleet Backend - Gestión de flota y mantenimiento preventivo");
    info!("==============================================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();
    let config = EnvironmentConfig::default();

    if config.traccar_configured() {
        info!("📡 Integración Traccar habilitada");
    } else {
        info!("📡 Integración Traccar no configurada (endpoints GPS responderán 503)");
    }

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone());

    let app = Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/auth", routes::auth_routes::create_auth_router(app_state.clone()))
        .nest("/api/user", routes::user_routes::create_user_router(app_state.clone()))
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router(app_state.clone()))
        .nest(
            "/api/purchase-order",
            routes::purchase_order_routes::create_purchase_order_router(app_state.clone()),
        )
        .nest(
            "/api/transaction",
            routes::transaction_routes::create_transaction_router(app_state.clone()),
        )
        .nest("/api/gps", routes::gps_routes::create_gps_router(app_state.clone()))
        .layer(cors_middleware())
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("🔐 Endpoints - Auth:");
    info!("   POST /api/auth/register - Registrar usuario");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Usuario actual");
    info!("👥 Endpoints - Usuarios (solo admin):");
    info!("   GET  /api/user - Listar usuarios");
    info!("   DELETE /api/user/:id - Eliminar usuario");
    info!("🚗 Endpoints - Vehículos:");
    info!("   POST /api/vehicle - Crear vehículo");
    info!("   GET  /api/vehicle - Listar vehículos con estado PMS");
    info!("   GET  /api/vehicle/reminders - Vehículos vencidos o por vencer");
    info!("   GET  /api/vehicle/:id - Obtener vehículo");
    info!("   PUT  /api/vehicle/:id - Actualizar vehículo");
    info!("   DELETE /api/vehicle/:id - Eliminar vehículo");
    info!("🔧 Endpoints - Mantenimiento:");
    info!("   POST /api/vehicle/:id/maintenance - Registrar mantenimiento");
    info!("   GET  /api/vehicle/:id/maintenance - Historial de mantenimiento");
    info!("📏 Endpoints - Odómetro:");
    info!("   POST /api/vehicle/:id/odometer - Registrar lectura");
    info!("   GET  /api/vehicle/:id/odometer - Historial de lecturas");
    info!("🧾 Endpoints - Órdenes de compra:");
    info!("   POST /api/purchase-order - Crear orden");
    info!("   GET  /api/purchase-order - Listar órdenes");
    info!("   GET  /api/purchase-order/:id - Obtener orden");
    info!("   PUT  /api/purchase-order/:id - Actualizar orden");
    info!("   DELETE /api/purchase-order/:id - Eliminar orden");
    info!("💰 Endpoints - Transacciones:");
    info!("   POST /api/transaction - Registrar transacción");
    info!("   GET  /api/transaction - Listar transacciones");
    info!("   GET  /api/transaction/:id - Obtener transacción");
    info!("   DELETE /api/transaction/:id - Eliminar transacción");
    info!("📡 Endpoints - GPS (Traccar):");
    info!("   GET  /api/gps/devices - Dispositivos registrados");
    info!("   GET  /api/gps/positions/:device_id - Posiciones de un dispositivo");

    // Iniciar servidor
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Fleet Backend funcionando correctamente",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
