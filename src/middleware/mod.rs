//! Middleware del sistema
//! 
//! Este módulo contiene el middleware de CORS, el manejo
//! de panics en los handlers y el detalle de errores en desarrollo.

pub mod cors;
pub mod error_detail;
pub mod panic_handler;

pub use cors::*;
pub use error_detail::*;
pub use panic_handler::*;
