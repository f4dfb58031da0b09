pub mod memory_product_repository;
pub mod product_repository;

pub use memory_product_repository::MemoryProductRepository;
pub use product_repository::{PgProductRepository, ProductRepository};
