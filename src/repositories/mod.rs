//! Repositorios
//!
//! Capa de acceso a datos: un repositorio por tabla, queries SQLx.

pub mod maintenance_repository;
pub mod odometer_repository;
pub mod purchase_order_repository;
pub mod transaction_repository;
pub mod user_repository;
pub mod vehicle_repository;
