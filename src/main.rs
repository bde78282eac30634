mod config;
mod controllers;
mod database;
mod dto;
mod engine;
mod middleware;
mod models;
mod repositories;
mod routes;
mod state;
mod store;
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
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    let log_level = if config.is_production() {
        tracing::Level::INFO
    } else {
        tracing::Level::DEBUG
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    info!("🚚 DelivPro Backend - Registro de entregas y gastos");
    info!("===================================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();
    let app_state = AppState::new(pool, config.clone());

    // CORS permisivo solo en desarrollo sin orígenes configurados
    let cors = if config.is_development() && config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    // Crear router de la API
    let app = Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/delivery", routes::delivery_routes::create_delivery_router())
        .nest("/api/expense", routes::expense_routes::create_expense_router())
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/dashboard", routes::dashboard_routes::create_dashboard_router())
        .nest("/api/report", routes::report_routes::create_report_router())
        .nest("/api/platform", routes::platform_routes::create_platform_router())
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("🚚 Endpoints - Delivery:");
    info!("   POST /api/delivery/start - Iniciar bloque de entrega");
    info!("   POST /api/delivery/:id/finish - Finalizar bloque de entrega");
    info!("   GET  /api/delivery - Listar bloques");
    info!("   GET  /api/delivery/active - Bloque en curso");
    info!("💸 Endpoints - Expense:");
    info!("   POST /api/expense - Registrar gasto");
    info!("   GET  /api/expense - Listar gastos");
    info!("🚗 Endpoints - Vehicle:");
    info!("   GET  /api/vehicle - Obtener vehículo");
    info!("   PUT  /api/vehicle - Actualizar vehículo");
    info!("   GET  /api/vehicle/maintenance - Estado del cambio de aceite");
    info!("📊 Endpoints - Dashboard y Reportes:");
    info!("   GET  /api/dashboard - Tarjetas, gráfico y actividad reciente");
    info!("   GET  /api/report - Filas y totales del reporte");
    info!("   GET  /api/platform - Plataformas y sus políticas");

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
        "message": "¡DelivPro Backend funcionando correctamente!",
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
