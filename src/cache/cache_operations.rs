//! Contrato del cache clave-valor con expiración.

use async_trait::async_trait;

use crate::utils::errors::AppResult;

/// Operaciones de cache sobre valores ya serializados.
///
/// Los errores se propagan; decidir qué hacer con ellos es
/// responsabilidad del servicio que llama.
#[async_trait]
pub trait CacheOperations: Send + Sync {
    /// Obtener un valor; `None` si no existe o expiró
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Guardar un valor con expiración en segundos
    async fn set_ex(&self, key: &str, value: &str, ttl: u64) -> AppResult<()>;

    /// Eliminar una clave; `true` si existía
    async fn delete(&self, key: &str) -> AppResult<bool>;

    /// Verificar que el cache responde
    async fn ping(&self) -> AppResult<()>;
}
