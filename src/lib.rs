//! E-commerce catalog API
//! 
//! Backend REST del catálogo de productos: PostgreSQL como fuente de verdad
//! y Redis como cache-aside de la lista de productos activos.

pub mod cache;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_router;
pub use state::AppState;
