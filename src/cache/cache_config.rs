//! Configuración de cache
//! 
//! Este módulo contiene la configuración para el sistema de cache.

use serde::{Deserialize, Serialize};
use std::env;

use super::cache_keys::PRODUCT_LIST_TTL;

/// Configuración del cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub redis_url: String,
    /// TTL en segundos de la lista de productos activos
    pub product_list_ttl: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            redis_url: "redis://localhost:6379".to_string(),
            product_list_ttl: PRODUCT_LIST_TTL,
        }
    }
}

impl CacheConfig {
    /// `REDIS_URL` tiene prioridad sobre `REDIS_HOST` / `REDIS_PORT`
    pub fn from_env() -> Self {
        let redis_url = env::var("REDIS_URL").unwrap_or_else(|_| {
            let host = env::var("REDIS_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("REDIS_PORT").unwrap_or_else(|_| "6379".to_string());
            format!("redis://{}:{}", host, port)
        });

        Self {
            redis_url,
            ..Self::default()
        }
    }
}
