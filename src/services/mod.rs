//! Services module
//!
//! Este módulo contiene la lógica de negocio y servicios de la aplicación.
//! Los servicios encapsulan operaciones que pueden involucrar
//! múltiples modelos o integraciones externas.

pub mod auth_service;
pub mod jwt_service;
pub mod pms_service;
pub mod traccar_service;

pub use pms_service::{PmsDueInfo, PmsStatus};
