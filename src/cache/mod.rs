//! Cache
//! 
//! Este módulo contiene el contrato de cache y sus implementaciones
//! (Redis y memoria del proceso).

pub mod cache_config;
pub mod cache_keys;
pub mod cache_operations;
pub mod memory_cache;
pub mod redis_client;

pub use cache_config::CacheConfig;
pub use cache_operations::CacheOperations;
pub use memory_cache::MemoryCache;
pub use redis_client::RedisClient;
