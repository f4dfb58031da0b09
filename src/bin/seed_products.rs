//! Carga el catálogo de ejemplo en PostgreSQL.

use anyhow::Result;
use dotenvy::dotenv;
use rust_decimal::Decimal;
use tracing::info;

use catalog_api::cache::cache_keys::ALL_ACTIVE_PRODUCTS;
use catalog_api::cache::{CacheConfig, CacheOperations, RedisClient};
use catalog_api::config::DatabaseConfig;
use catalog_api::database::DatabaseConnection;
use catalog_api::models::NewProduct;
use catalog_api::repositories::{PgProductRepository, ProductRepository};

const IMAGE_BASE: &str = "https://images.unsplash.com";

fn sample_products() -> Vec<NewProduct> {
    let product = |name: &str, description: &str, price: i64, stock: i32, category: &str, image: &str| {
        NewProduct {
            name: name.to_string(),
            description: Some(description.to_string()),
            price: Decimal::new(price * 100, 2),
            stock,
            category: Some(category.to_string()),
            image_url: Some(format!("{}/{}?w=500", IMAGE_BASE, image)),
            is_active: true,
        }
    };

    vec![
        product(
            "Premium Wireless Headphones",
            "High-quality wireless headphones with noise cancellation and up to 30 hours of battery life.",
            1_299_000,
            50,
            "Electronics",
            "photo-1505740420928-5e560c06d30e",
        ),
        product(
            "Smart Watch Pro",
            "Smartwatch with full health tracking, GPS and water resistance up to 50 meters.",
            2_499_000,
            30,
            "Electronics",
            "photo-1523275335684-37898b6baf30",
        ),
        product(
            "Mechanical Keyboard RGB",
            "Gaming mechanical keyboard with RGB lighting and Cherry MX switches.",
            899_000,
            75,
            "Electronics",
            "photo-1587829741301-dc798b83add3",
        ),
        product(
            "Ultrawide Monitor 34\"",
            "34 inch ultrawide monitor, 3440x1440 resolution and 144Hz refresh rate.",
            5_499_000,
            20,
            "Electronics",
            "photo-1527443224154-c4a3942d3acf",
        ),
        product(
            "Laptop Stand Aluminum",
            "Premium aluminum laptop stand with adjustable height and cable management.",
            349_000,
            100,
            "Accessories",
            "photo-1527864550417-7fd91fc51a46",
        ),
        product(
            "USB-C Hub 7-in-1",
            "USB-C hub with 7 ports including 4K HDMI, USB 3.0 and an SD card reader.",
            299_000,
            150,
            "Accessories",
            "photo-1625948515291-69613efd103f",
        ),
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🌱 Iniciando carga de productos...");

    let database = DatabaseConnection::connect(&DatabaseConfig::from_env()).await?;
    database.run_migrations().await?;

    let repository = PgProductRepository::new(database.pool().clone());
    let products = sample_products();
    let total = products.len();

    for new_product in products {
        let product = repository.create(new_product).await?;
        info!("✅ Creado: {} ({})", product.name, product.price);
    }

    // La lista cacheada ya no refleja la base de datos
    let redis = RedisClient::new(&CacheConfig::from_env()).await?;
    redis.delete(ALL_ACTIVE_PRODUCTS).await?;

    database.close().await;
    info!("🎉 {} productos cargados exitosamente", total);
    Ok(())
}
