//! Claves de cache en uso.

/// Colección serializada de todos los productos activos
pub const ALL_ACTIVE_PRODUCTS: &str = "products:all";

/// Expiración de la colección de productos activos (5 minutos)
pub const PRODUCT_LIST_TTL: u64 = 300;
