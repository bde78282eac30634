//! Repositorios de acceso a datos
//!
//! Implementaciones sqlx del contrato de store y del vehículo.

pub mod record_store;
pub mod vehicle_repository;

pub use record_store::PgRecordStore;
