use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::product::{NewProduct, Product};
use crate::utils::errors::AppResult;

/// Contrato del almacenamiento persistente de productos
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insertar un producto; asigna id y timestamps
    async fn create(&self, product: NewProduct) -> AppResult<Product>;

    /// Productos con `is_active = true`, más recientes primero
    async fn find_all_active(&self) -> AppResult<Vec<Product>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    async fn ping(&self) -> AppResult<()>;
}

pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, product: NewProduct) -> AppResult<Product> {
        let now = Utc::now();

        let result = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (
                id, name, description, price, stock, category,
                image_url, is_active, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            RETURNING *
            "#
        )
        .bind(Uuid::new_v4())
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.stock)
        .bind(&product.category)
        .bind(&product.image_url)
        .bind(product.is_active)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn find_all_active(&self) -> AppResult<Vec<Product>> {
        let result = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE is_active = TRUE ORDER BY created_at DESC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let result = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
