//! Cache en memoria del proceso
//! 
//! Implementa el mismo contrato que Redis con expiración por entrada.
//! Se usa con `STORAGE_BACKEND=memory` y en los tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

use super::CacheOperations;
use crate::utils::errors::AppResult;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Número de entradas vigentes
    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.values().filter(|e| !e.is_expired()).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CacheOperations for MemoryCache {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if !entry.is_expired() => {
                    debug!("📥 Cache HIT para clave: {}", key);
                    return Ok(Some(entry.value.clone()));
                }
                Some(_) => {}
                None => {
                    debug!("❌ Cache MISS para clave: {}", key);
                    return Ok(None);
                }
            }
        }

        // Entrada expirada: se elimina de forma perezosa
        let mut entries = self.entries.write().await;
        if entries.get(key).map_or(false, CacheEntry::is_expired) {
            entries.remove(key);
        }
        debug!("⏰ Cache expirado para clave: {}", key);
        Ok(None)
    }

    async fn set_ex(&self, key: &str, value: &str, ttl: u64) -> AppResult<()> {
        let entry = CacheEntry {
            value: value.to_string(),
            expires_at: Instant::now() + Duration::from_secs(ttl),
        };
        self.entries.write().await.insert(key.to_string(), entry);
        debug!("💾 Cache SET para clave: {} (TTL: {}s)", key, ttl);
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<bool> {
        let removed = self.entries.write().await.remove(key);
        Ok(removed.map_or(false, |e| !e.is_expired()))
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_delete() {
        let cache = MemoryCache::new();
        assert_eq!(cache.get("k").await.unwrap(), None);

        cache.set_ex("k", "v", 60).await.unwrap();
        assert_eq!(cache.get("k").await.unwrap().as_deref(), Some("v"));
        assert_eq!(cache.len().await, 1);

        assert!(cache.delete("k").await.unwrap());
        assert!(!cache.delete("k").await.unwrap());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_zero_ttl_expires_immediately() {
        let cache = MemoryCache::new();
        cache.set_ex("k", "v", 0).await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), None);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_set_overwrites_previous_value() {
        let cache = MemoryCache::new();
        cache.set_ex("k", "old", 60).await.unwrap();
        cache.set_ex("k", "new", 60).await.unwrap();
        assert_eq!(cache.get("k").await.unwrap().as_deref(), Some("new"));
    }
}
