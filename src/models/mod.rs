//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod delivery;
pub mod expense;
pub mod platform;
pub mod record;
pub mod vehicle;
