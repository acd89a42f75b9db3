use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use fleet_management::config::environment::EnvironmentConfig;
use fleet_management::create_app;
use fleet_management::database::DatabaseConnection;
use fleet_management::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚐 Fleet Management - API de flota");
    info!("==================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if let Err(e) = db_connection.run_migrations().await {
        error!("❌ Error ejecutando migraciones: {}", e);
        return Err(anyhow::anyhow!("Error de migraciones: {}", e));
    }

    let pool = db_connection.pool().clone();

    // Crear router de la API
    let config = EnvironmentConfig::from_env();
    let app_state = AppState::new(pool, config.clone());
    let app = create_app(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔗 Endpoints - Assignments:");
    info!("   POST   /api/assignments - Crear asignación van/operador");
    info!("   GET    /api/assignments - Listar asignaciones");
    info!("   PUT    /api/assignments - Actualizar asignación");
    info!("   DELETE /api/assignments - Eliminar asignación");
    info!("👤 Endpoints - Operators:");
    info!("   GET    /api/operators - Listar operadores (no archivados)");
    info!("   POST   /api/operators - Registrar operador");
    info!("   PUT    /api/operators/:id - Actualizar operador");
    info!("   DELETE /api/operators - Archivar operador");
    info!("🚐 Endpoints - Vans:");
    info!("   POST   /api/vans - Crear van");
    info!("   GET    /api/vans - Listar vans");
    info!("   GET    /api/vans/:id - Obtener van");
    info!("   PUT    /api/vans/:id - Actualizar van");
    info!("   DELETE /api/vans/:id - Eliminar van");

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
