//! Modelo de Vehicle
//!
//! Vehículo actual del repartidor (uno por driver). Se actualiza desde la
//! pantalla de ajustes; no se versiona.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Vehicle {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub model: String,
    pub plate: String,
    /// Vencimiento de la inspección técnica (shaken), si se registró
    pub shaken_expiry: Option<NaiveDate>,
    /// Odómetro al que vence el próximo cambio de aceite
    pub next_oil_change_km: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Request para actualizar los datos del vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(length(min = 2, max = 20))]
    pub plate: String,

    pub shaken_expiry: Option<NaiveDate>,

    #[validate(range(min = 0))]
    pub next_oil_change_km: Option<i64>,
}
