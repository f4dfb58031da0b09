use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::cache::cache_keys::ALL_ACTIVE_PRODUCTS;
use crate::cache::CacheOperations;
use crate::dto::product_dto::CreateProductRequest;
use crate::models::product::{NewProduct, Product};
use crate::repositories::ProductRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};

/// Servicio de catálogo: lectura cache-aside y invalidación en escritura
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
    cache: Arc<dyn CacheOperations>,
    list_ttl: u64,
    // Serializa la recarga del cache y las escrituras dentro del proceso
    refresh_lock: Mutex<()>,
}

impl ProductService {
    pub fn new(
        repository: Arc<dyn ProductRepository>,
        cache: Arc<dyn CacheOperations>,
        list_ttl: u64,
    ) -> Self {
        Self {
            repository,
            cache,
            list_ttl,
            refresh_lock: Mutex::new(()),
        }
    }

    /// Listar productos activos (cache primero, luego PostgreSQL)
    pub async fn get_all_products(&self) -> AppResult<Vec<Product>> {
        self.load_active_products()
            .await
            .map_err(|e| retrieval_error("Failed to fetch products", e))
    }

    /// Obtener un producto por id, siempre desde la base de datos
    pub async fn get_product_by_id(&self, id: &str) -> AppResult<Product> {
        // Un id que no es UUID nunca fue emitido
        let id = Uuid::parse_str(id.trim()).map_err(|_| not_found_error("Product"))?;

        match self.repository.find_by_id(id).await {
            Ok(Some(product)) => Ok(product),
            Ok(None) => Err(not_found_error("Product")),
            Err(e) => Err(retrieval_error("Failed to fetch product", e)),
        }
    }

    /// Crear un producto e invalidar la lista cacheada
    pub async fn create_product(&self, request: CreateProductRequest) -> AppResult<Product> {
        let new_product = NewProduct::try_from(request)?;

        let _guard = self.refresh_lock.lock().await;

        let product = self.repository.create(new_product).await.map_err(|e| {
            if e.is_constraint_violation() {
                AppError::BadRequest(format!("Failed to create product: {}", e))
            } else {
                AppError::Creation(format!("Failed to create product: {}", e))
            }
        })?;

        self.cache.delete(ALL_ACTIVE_PRODUCTS).await.map_err(|e| {
            warn!("⚠️ Producto {} creado pero el cache no se invalidó", product.id);
            AppError::Creation(format!("Failed to create product: {}", e))
        })?;

        info!("✅ Producto creado: {} ({})", product.name, product.id);
        Ok(product)
    }

    /// Readiness: ambos stores deben responder
    pub async fn check_readiness(&self) -> AppResult<()> {
        self.repository
            .ping()
            .await
            .map_err(|e| AppError::ServiceUnavailable(format!("database: {}", e)))?;
        self.cache
            .ping()
            .await
            .map_err(|e| AppError::ServiceUnavailable(format!("cache: {}", e)))?;
        Ok(())
    }

    async fn load_active_products(&self) -> AppResult<Vec<Product>> {
        if let Some(products) = self.read_cached_products().await? {
            return Ok(products);
        }

        let _guard = self.refresh_lock.lock().await;

        // Otro request pudo poblar el cache mientras esperábamos el lock
        if let Some(products) = self.read_cached_products().await? {
            return Ok(products);
        }

        info!("📦 Cache MISS - consultando productos en PostgreSQL");
        let products = self.repository.find_all_active().await?;

        let payload = serde_json::to_string(&products)?;
        self.cache
            .set_ex(ALL_ACTIVE_PRODUCTS, &payload, self.list_ttl)
            .await?;

        Ok(products)
    }

    async fn read_cached_products(&self) -> AppResult<Option<Vec<Product>>> {
        match self.cache.get(ALL_ACTIVE_PRODUCTS).await? {
            Some(raw) => {
                info!("⚡ Cache HIT - productos cargados desde cache");
                Ok(Some(serde_json::from_str(&raw)?))
            }
            None => Ok(None),
        }
    }
}

fn retrieval_error(message: &str, source: AppError) -> AppError {
    AppError::Retrieval {
        message: message.to_string(),
        detail: source.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::repositories::MemoryProductRepository;
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Repositorio que cuenta las lecturas de la lista
    struct CountingRepository {
        inner: MemoryProductRepository,
        list_calls: AtomicUsize,
        delay: Duration,
    }

    impl CountingRepository {
        fn new(delay: Duration) -> Self {
            Self {
                inner: MemoryProductRepository::new(),
                list_calls: AtomicUsize::new(0),
                delay,
            }
        }

        fn list_calls(&self) -> usize {
            self.list_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ProductRepository for CountingRepository {
        async fn create(&self, product: NewProduct) -> AppResult<Product> {
            self.inner.create(product).await
        }

        async fn find_all_active(&self) -> AppResult<Vec<Product>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            self.inner.find_all_active().await
        }

        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
            self.inner.find_by_id(id).await
        }

        async fn ping(&self) -> AppResult<()> {
            Ok(())
        }
    }

    struct FailingRepository;

    #[async_trait]
    impl ProductRepository for FailingRepository {
        async fn create(&self, _product: NewProduct) -> AppResult<Product> {
            Err(AppError::Database(sqlx::Error::PoolTimedOut))
        }

        async fn find_all_active(&self) -> AppResult<Vec<Product>> {
            Err(AppError::Database(sqlx::Error::PoolTimedOut))
        }

        async fn find_by_id(&self, _id: Uuid) -> AppResult<Option<Product>> {
            Err(AppError::Database(sqlx::Error::PoolTimedOut))
        }

        async fn ping(&self) -> AppResult<()> {
            Err(AppError::Database(sqlx::Error::PoolTimedOut))
        }
    }

    struct FailingCache;

    #[async_trait]
    impl CacheOperations for FailingCache {
        async fn get(&self, _key: &str) -> AppResult<Option<String>> {
            Err(AppError::Cache("connection refused".to_string()))
        }

        async fn set_ex(&self, _key: &str, _value: &str, _ttl: u64) -> AppResult<()> {
            Err(AppError::Cache("connection refused".to_string()))
        }

        async fn delete(&self, _key: &str) -> AppResult<bool> {
            Err(AppError::Cache("connection refused".to_string()))
        }

        async fn ping(&self) -> AppResult<()> {
            Err(AppError::Cache("connection refused".to_string()))
        }
    }

    fn request(name: &str, price: &str, is_active: Option<bool>) -> CreateProductRequest {
        CreateProductRequest {
            name: Some(name.to_string()),
            price: Some(Decimal::from_str(price).unwrap()),
            stock: Some(5),
            is_active,
            ..Default::default()
        }
    }

    fn service_with(repo: Arc<CountingRepository>, ttl: u64) -> (ProductService, Arc<MemoryCache>) {
        let cache = Arc::new(MemoryCache::new());
        let service = ProductService::new(repo, cache.clone(), ttl);
        (service, cache)
    }

    #[tokio::test]
    async fn test_list_only_returns_active_products() {
        let repo = Arc::new(CountingRepository::new(Duration::ZERO));
        let (service, _) = service_with(repo, 300);

        service.create_product(request("Visible", "1.00", None)).await.unwrap();
        service.create_product(request("Hidden", "1.00", Some(false))).await.unwrap();

        let products = service.get_all_products().await.unwrap();
        assert_eq!(products.len(), 1);
        assert!(products.iter().all(|p| p.is_active));
    }

    #[tokio::test]
    async fn test_second_list_is_served_from_cache() {
        let repo = Arc::new(CountingRepository::new(Duration::ZERO));
        let (service, cache) = service_with(repo.clone(), 300);
        service.create_product(request("Test Pen", "10.00", None)).await.unwrap();

        let first = service.get_all_products().await.unwrap();
        let second = service.get_all_products().await.unwrap();

        assert_eq!(repo.list_calls(), 1);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
        assert!(cache.get(ALL_ACTIVE_PRODUCTS).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_create_invalidates_cached_list() {
        let repo = Arc::new(CountingRepository::new(Duration::ZERO));
        let (service, cache) = service_with(repo.clone(), 300);

        assert!(service.get_all_products().await.unwrap().is_empty());
        assert!(!cache.is_empty().await);

        service.create_product(request("Test Pen", "10.00", None)).await.unwrap();
        assert!(cache.is_empty().await);

        let products = service.get_all_products().await.unwrap();
        assert!(products.iter().any(|p| p.name == "Test Pen"));
        assert_eq!(repo.list_calls(), 2);
    }

    #[tokio::test]
    async fn test_expired_entry_is_repopulated() {
        let repo = Arc::new(CountingRepository::new(Duration::ZERO));
        let (service, _) = service_with(repo.clone(), 0);

        service.get_all_products().await.unwrap();
        service.get_all_products().await.unwrap();

        assert_eq!(repo.list_calls(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_misses_query_store_once() {
        let repo = Arc::new(CountingRepository::new(Duration::from_millis(50)));
        let (service, _) = service_with(repo.clone(), 300);
        let service = Arc::new(service);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move { service.get_all_products().await })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }
        assert_eq!(repo.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_get_by_id_round_trip_and_not_found() {
        let repo = Arc::new(CountingRepository::new(Duration::ZERO));
        let (service, _) = service_with(repo, 300);
        let created = service.create_product(request("Widget", "19.99", None)).await.unwrap();

        let first = service.get_product_by_id(&created.id.to_string()).await.unwrap();
        let second = service.get_product_by_id(&created.id.to_string()).await.unwrap();
        assert_eq!(first, created);
        assert_eq!(first, second);

        let missing = service.get_product_by_id(&Uuid::new_v4().to_string()).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));

        let malformed = service.get_product_by_id("not-a-uuid").await;
        assert!(matches!(malformed, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_invalid_create_never_reaches_store() {
        let repo = Arc::new(CountingRepository::new(Duration::ZERO));
        let (service, _) = service_with(repo.clone(), 300);

        let result = service
            .create_product(CreateProductRequest {
                price: Some(Decimal::ONE),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(repo.inner.count().await, 0);
    }

    #[tokio::test]
    async fn test_store_failures_are_wrapped() {
        let service = ProductService::new(
            Arc::new(FailingRepository),
            Arc::new(MemoryCache::new()),
            300,
        );

        match service.get_all_products().await {
            Err(AppError::Retrieval { message, detail }) => {
                assert_eq!(message, "Failed to fetch products");
                assert!(detail.contains("pool timed out"));
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let id = Uuid::new_v4().to_string();
        assert!(matches!(
            service.get_product_by_id(&id).await,
            Err(AppError::Retrieval { .. })
        ));

        assert!(matches!(
            service.create_product(request("Widget", "1", None)).await,
            Err(AppError::Creation(_))
        ));
    }

    #[tokio::test]
    async fn test_cache_failure_is_retrieval_failure() {
        let service = ProductService::new(
            Arc::new(MemoryProductRepository::new()),
            Arc::new(FailingCache),
            300,
        );

        assert!(matches!(
            service.get_all_products().await,
            Err(AppError::Retrieval { .. })
        ));
    }

    #[tokio::test]
    async fn test_readiness_reports_failing_store() {
        let ready = ProductService::new(
            Arc::new(MemoryProductRepository::new()),
            Arc::new(MemoryCache::new()),
            300,
        );
        assert!(ready.check_readiness().await.is_ok());

        let no_database = ProductService::new(
            Arc::new(FailingRepository),
            Arc::new(MemoryCache::new()),
            300,
        );
        match no_database.check_readiness().await {
            Err(AppError::ServiceUnavailable(detail)) => assert!(detail.starts_with("database")),
            other => panic!("unexpected result: {:?}", other),
        }

        let no_cache = ProductService::new(
            Arc::new(MemoryProductRepository::new()),
            Arc::new(FailingCache),
            300,
        );
        match no_cache.check_readiness().await {
            Err(AppError::ServiceUnavailable(detail)) => assert!(detail.starts_with("cache")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
