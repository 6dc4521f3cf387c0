//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod auth;
pub mod maintenance;
pub mod odometer;
pub mod purchase_order;
pub mod transaction;
pub mod user;
pub mod vehicle;
