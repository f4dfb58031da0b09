//! Shared application state
//! 
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::services::ProductService;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub product_service: Arc<ProductService>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, product_service: Arc<ProductService>) -> Self {
        Self {
            config,
            product_service,
        }
    }
}
