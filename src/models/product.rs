//! Modelo de Product
//! 
//! Este módulo contiene el struct Product y su variante de inserción.
//! Mapea exactamente a la tabla `products` de PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Product principal - mapea exactamente a la tabla products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Se serializa como número JSON, no como string
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: i32,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Datos ya validados para insertar un producto.
///
/// El identificador y los timestamps los asigna el repositorio.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub stock: i32,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
}

impl NewProduct {
    /// Materializar el registro con id y timestamps nuevos
    pub fn into_product(self, id: Uuid, now: DateTime<Utc>) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            category: self.category,
            image_url: self.image_url,
            is_active: self.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}
