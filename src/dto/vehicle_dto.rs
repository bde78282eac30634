//! DTOs de Vehicle

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::engine::metrics::MaintenanceStatus;
use crate::models::vehicle::Vehicle;

/// Response del vehículo actual
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub model: String,
    pub plate: String,
    pub shaken_expiry: Option<NaiveDate>,
    pub next_oil_change_km: Option<i64>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            model: vehicle.model,
            plate: vehicle.plate,
            shaken_expiry: vehicle.shaken_expiry,
            next_oil_change_km: vehicle.next_oil_change_km,
        }
    }
}

/// Response del estado de mantenimiento
///
/// current_km en None significa que aún no hay ninguna lectura de odómetro
/// registrada; en ese caso el estado es "ok" por definición.
#[derive(Debug, Serialize)]
pub struct MaintenanceResponse {
    pub current_km: Option<i64>,
    pub next_oil_change_km: Option<i64>,
    pub status: MaintenanceStatus,
}
