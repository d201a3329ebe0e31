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

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use axum::Router;
use dotenvy::dotenv;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 Car Rental - API de administración");
    info!("=====================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // CORS: permisivo en desarrollo, orígenes explícitos en producción
    let cors = if config.is_development() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(&config.cors_origins)
    };

    let app_state = AppState::new(pool, config.clone());

    let app = Router::new()
        .nest("/api/cars", routes::car_routes::create_car_router())
        .nest("/api/customers", routes::customer_routes::create_customer_router())
        .nest("/api/rentals", routes::rental_routes::create_rental_router())
        .nest("/api/branches", routes::branch_routes::create_branch_router())
        .nest("/api/payments", routes::payment_routes::create_payment_router())
        .nest("/api/transactions", routes::transaction_routes::create_transaction_router())
        .nest("/api/exchange", routes::exchange_routes::create_exchange_router())
        .nest("/api/dashboard", routes::dashboard_routes::create_dashboard_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(cors),
        )
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("🚗 Cars:");
    info!("   GET    /api/cars - Listar coches");
    info!("   POST   /api/cars - Crear coche");
    info!("   GET    /api/cars/available - Coches disponibles");
    info!("   GET    /api/cars/search?keyword= - Buscar coches");
    info!("   GET    /api/cars/filter?minRateCents=&maxRateCents= - Filtrar por tarifa");
    info!("   GET    /api/cars/:id - Obtener coche");
    info!("   PUT    /api/cars/:id - Actualizar coche");
    info!("   DELETE /api/cars/:id - Eliminar coche");
    info!("   PATCH  /api/cars/:id/status?status= - Cambiar estado");
    info!("👤 Customers:");
    info!("   GET    /api/customers - Listar clientes");
    info!("   POST   /api/customers - Crear cliente");
    info!("   GET    /api/customers/search?keyword= - Buscar clientes");
    info!("   GET    /api/customers/email/:email - Cliente por email");
    info!("📋 Rentals:");
    info!("   GET    /api/rentals - Listar reservas");
    info!("   POST   /api/rentals - Crear reserva");
    info!("   GET    /api/rentals/overdue - Reservas vencidas");
    info!("   GET    /api/rentals/status/:status - Reservas por estado");
    info!("   GET    /api/rentals/calculate-cost?carId=&startDate=&endDate= - Presupuesto");
    info!("   PATCH  /api/rentals/:id/complete?actualReturnDate= - Completar reserva");
    info!("   PATCH  /api/rentals/:id/cancel - Cancelar reserva");
    info!("🏢 Branches:");
    info!("   GET    /api/branches - Listar sucursales");
    info!("   POST   /api/branches - Crear sucursal");
    info!("💳 Payments:");
    info!("   GET    /api/payments - Listar pagos");
    info!("   POST   /api/payments - Registrar pago");
    info!("   GET    /api/payments/methods - Métodos de pago");
    info!("   PATCH  /api/payments/methods/:id/default - Método por defecto");
    info!("💰 Transactions:");
    info!("   GET    /api/transactions - Listar asientos");
    info!("   GET    /api/transactions/summary - Resumen ingresos/gastos");
    info!("💱 Exchange:");
    info!("   GET    /api/exchange/rates - Tasas de cambio");
    info!("   GET    /api/exchange/convert?amount=&from=&to= - Convertir importe");
    info!("📊 Dashboard:");
    info!("   GET    /api/dashboard/stats - Estadísticas generales");
    info!("   GET    /api/dashboard/earnings - Ingresos por mes");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
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
