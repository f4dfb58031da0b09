//! Services module
//! 
//! Este módulo contiene la lógica de negocio de la aplicación.
//! Los servicios orquestan los repositorios y el cache.

pub mod product_service;

pub use product_service::ProductService;
