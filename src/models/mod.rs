//! Modelos del sistema
//! 
//! Este módulo contiene los modelos de datos que mapean exactamente
//! al schema PostgreSQL.

pub mod product;

pub use product::{NewProduct, Product};
