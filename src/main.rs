use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use dotenvy::dotenv;

use catalog_api::cache::{CacheConfig, CacheOperations, MemoryCache, RedisClient};
use catalog_api::config::{DatabaseConfig, EnvironmentConfig, StorageBackend};
use catalog_api::database::DatabaseConnection;
use catalog_api::repositories::{MemoryProductRepository, PgProductRepository, ProductRepository};
use catalog_api::services::ProductService;
use catalog_api::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    let level = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🛒 E-commerce Catalog API");
    info!("📝 Entorno: {}", config.environment);

    let cache_config = CacheConfig::from_env();

    // Inicializar stores según el backend configurado
    let (repository, cache, database) = match config.storage_backend {
        StorageBackend::Postgres => {
            let database = DatabaseConnection::connect(&DatabaseConfig::from_env())
                .await
                .map_err(|e| {
                    error!("❌ Error conectando a la base de datos: {:#}", e);
                    e
                })?;
            database.run_migrations().await?;

            let redis = RedisClient::new(&cache_config).await.map_err(|e| {
                error!("❌ Error conectando a Redis: {}", e);
                anyhow::anyhow!("Error de Redis: {}", e)
            })?;

            let repository: Arc<dyn ProductRepository> =
                Arc::new(PgProductRepository::new(database.pool().clone()));
            let cache: Arc<dyn CacheOperations> = Arc::new(redis);
            (repository, cache, Some(database))
        }
        StorageBackend::Memory => {
            info!("🧪 Usando almacenamiento en memoria (los datos no persisten)");
            let repository: Arc<dyn ProductRepository> = Arc::new(MemoryProductRepository::new());
            let cache: Arc<dyn CacheOperations> = Arc::new(MemoryCache::new());
            (repository, cache, None)
        }
    };

    let product_service = Arc::new(ProductService::new(
        repository,
        cache,
        cache_config.product_list_ttl,
    ));

    let app = create_router(AppState::new(config.clone(), product_service));

    let addr: SocketAddr = config.server_url().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles (también bajo /api):");
    info!("   GET  /health - Health check");
    info!("   GET  /products - Listar productos activos");
    info!("   GET  /products/:id - Obtener producto");
    info!("   POST /products - Crear producto");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
    }

    if let Some(database) = database {
        database.close().await;
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
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
