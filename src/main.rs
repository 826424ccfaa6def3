use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use vehicle_rental::config::environment::EnvironmentConfig;
use vehicle_rental::database::DatabaseConnection;
use vehicle_rental::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use vehicle_rental::routes;
use vehicle_rental::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Vehicle Rental - API de alquiler de vehículos");
    info!("================================================");

    let config = EnvironmentConfig::from_env()?;

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::connect(&config.database_url).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // CORS: orígenes explícitos si están configurados
    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    // Crear router de la API
    let app_state = AppState::new(pool, config.clone());
    let app = routes::create_app(app_state).layer(cors);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Health check");
    info!("🔑 Auth:");
    info!("   POST   /api/auth/register - Registro de usuario");
    info!("   POST   /api/auth/login - Login de usuario");
    info!("   POST   /api/auth/admin/login - Login de administrador");
    info!("   GET    /api/auth/me - Identidad actual");
    info!("🚗 Catálogo:");
    info!("   GET    /api/vehicle - Listar vehículos (filtros opcionales)");
    info!("   GET    /api/vehicle/:id - Obtener vehículo");
    info!("   POST   /api/vehicle - Crear vehículo (admin)");
    info!("   PUT    /api/vehicle/:id - Actualizar vehículo (admin)");
    info!("   DELETE /api/vehicle/:id - Eliminar vehículo (admin)");
    info!("📅 Reservas:");
    info!("   POST   /api/booking - Crear reserva");
    info!("   GET    /api/booking/mine - Mis reservas");
    info!("   GET    /api/booking - Todas las reservas (admin)");
    info!("   PATCH  /api/booking/:id/status - Cambiar estado (admin)");
    info!("👤 Usuario:");
    info!("   GET    /api/user/profile - Mi perfil");
    info!("   PUT    /api/user/profile - Actualizar perfil");
    info!("   POST   /api/user/license - Subir carnet de conducir");
    info!("🛠  Back-office:");
    info!("   POST   /api/admin/promote - Promover usuario a admin");
    info!("   GET    /api/admin/users - Listar usuarios");
    info!("   DELETE /api/admin/users/:id - Eliminar usuario");
    info!("   GET    /api/admin/admins - Listar administradores");
    info!("   POST   /api/admin/admins - Crear administrador");
    info!("   POST   /api/admin/license/verify - Verificar licencia");
    info!("💟 Lista de deseos:");
    info!("   GET    /api/wishlist - Mi lista de deseos");
    info!("   POST   /api/wishlist - Guardar vehículo");
    info!("   DELETE /api/wishlist/:vehicle_id - Quitar vehículo");
    info!("💳 Pagos:");
    info!("   POST   /api/payment/esewa - Mock de pago eSewa");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    // Cerrar el pool explícitamente al apagar
    db_connection.close().await;

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
