use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};
use tracing::{debug, info};

use super::{CacheConfig, CacheOperations};
use crate::utils::errors::{AppError, AppResult};

/// Cliente Redis con connection manager y operaciones async
#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
}

impl RedisClient {
    /// Crear nuevo cliente Redis
    pub async fn new(config: &CacheConfig) -> AppResult<Self> {
        info!("🔗 Conectando a Redis: {}", config.redis_url);

        let client = redis::Client::open(config.redis_url.clone())?;
        let manager = ConnectionManager::new(client).await?;

        let redis = Self { manager };
        redis.ping().await?;

        info!("✅ Redis conectado exitosamente");
        Ok(redis)
    }
}

#[async_trait]
impl CacheOperations for RedisClient {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut conn = self.manager.clone();

        let value: Option<String> = conn.get(key).await?;
        match &value {
            Some(_) => debug!("📥 Cache HIT para clave: {}", key),
            None => debug!("❌ Cache MISS para clave: {}", key),
        }

        Ok(value)
    }

    async fn set_ex(&self, key: &str, value: &str, ttl: u64) -> AppResult<()> {
        let mut conn = self.manager.clone();

        // SETEX rechaza expiraciones de 0 segundos
        let ttl = ttl.max(1);
        let _: () = redis::cmd("SETEX")
            .arg(key)
            .arg(ttl)
            .arg(value)
            .query_async(&mut conn)
            .await?;

        debug!("💾 Cache SET para clave: {} (TTL: {}s)", key, ttl);
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<bool> {
        let mut conn = self.manager.clone();

        let count: i64 = conn.del(key).await?;
        debug!("🗑️ Cache DELETE para clave: {} (eliminados: {})", key, count);

        Ok(count > 0)
    }

    async fn ping(&self) -> AppResult<()> {
        let mut conn = self.manager.clone();

        let response: String = redis::cmd("PING").query_async(&mut conn).await?;
        if response == "PONG" {
            Ok(())
        } else {
            Err(AppError::Cache(format!("Respuesta inesperada a PING: {}", response)))
        }
    }
}
