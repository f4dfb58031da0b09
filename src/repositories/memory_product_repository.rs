//! Repositorio de productos en memoria
//! 
//! Misma semántica que PostgreSQL (ids nuevos, orden por `created_at`
//! descendente, sin borrado). Se usa con `STORAGE_BACKEND=memory` y en tests.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::ProductRepository;
use crate::models::product::{NewProduct, Product};
use crate::utils::errors::AppResult;

#[derive(Debug, Default)]
pub struct MemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Número total de productos almacenados (activos o no)
    pub async fn count(&self) -> usize {
        self.products.read().await.len()
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn create(&self, product: NewProduct) -> AppResult<Product> {
        let mut products = self.products.write().await;

        // created_at estrictamente creciente para un orden estable
        let mut now = Utc::now();
        if let Some(last) = products.last() {
            if now <= last.created_at {
                now = last.created_at + chrono::Duration::microseconds(1);
            }
        }

        let product = product.into_product(Uuid::new_v4(), now);
        products.push(product.clone());
        Ok(product)
    }

    async fn find_all_active(&self) -> AppResult<Vec<Product>> {
        let products = self.products.read().await;
        let mut active: Vec<Product> = products.iter().filter(|p| p.is_active).cloned().collect();
        active.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(active)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
