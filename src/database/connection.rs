//! Configuración de conexión a PostgreSQL
//! 
//! Este módulo maneja el ciclo de vida del pool de PostgreSQL:
//! conexión, migraciones y cierre ordenado.

use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Pool de PostgreSQL con adquisición y liberación explícitas
#[derive(Clone)]
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Crear el pool y verificar que la conexión funciona
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        info!("🔗 Conectando a PostgreSQL: {}", config.masked_url());

        let pool = config
            .create_pool()
            .await
            .context("No se pudo crear el pool de PostgreSQL")?;

        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .context("PostgreSQL no responde")?;

        info!("✅ PostgreSQL conectado exitosamente");
        Ok(Self { pool })
    }

    /// Obtener el pool de conexiones
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Ejecutar migraciones de la base de datos
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Error ejecutando migraciones")?;

        info!("✅ Migraciones aplicadas");
        Ok(())
    }

    /// Cerrar todas las conexiones del pool
    pub async fn close(&self) {
        self.pool.close().await;
        info!("🔌 Pool de PostgreSQL cerrado");
    }
}
