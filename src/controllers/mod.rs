//! Controllers
//!
//! Orquestación entre validación, repositorios y servicios de dominio.

pub mod maintenance_controller;
pub mod odometer_controller;
pub mod purchase_order_controller;
pub mod transaction_controller;
pub mod user_controller;
pub mod vehicle_controller;
