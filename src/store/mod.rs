//! Contrato del Record Store
//!
//! Interfaz explícita de lectura/escritura que los controllers reciben
//! inyectada, para que la lógica de ciclo de vida y métricas sea testeable
//! sin PostgreSQL. Los listados devuelven el snapshot completo del
//! repartidor en orden de inserción; las escrituras son upsert por id.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::delivery::Delivery;
use crate::models::expense::Expense;
use crate::utils::errors::AppResult;

pub mod memory;

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn list_deliveries(&self, driver_id: Uuid) -> AppResult<Vec<Delivery>>;

    async fn list_expenses(&self, driver_id: Uuid) -> AppResult<Vec<Expense>>;

    async fn find_delivery(&self, id: Uuid) -> AppResult<Option<Delivery>>;

    /// Upsert por id
    async fn save_delivery(&self, delivery: &Delivery) -> AppResult<()>;

    /// Upsert por id
    async fn save_expense(&self, expense: &Expense) -> AppResult<()>;
}
