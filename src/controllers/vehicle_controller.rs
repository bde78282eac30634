//! Controller de Vehicle
//!
//! Datos del vehículo actual y estado del cambio de aceite. El odómetro
//! actual se toma de la lectura más alta registrada en entregas y gastos.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::vehicle_dto::{MaintenanceResponse, VehicleResponse};
use crate::dto::ApiResponse;
use crate::engine::metrics;
use crate::models::vehicle::UpdateVehicleRequest;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::repositories::PgRecordStore;
use crate::store::RecordStore;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_plate;

pub struct VehicleController {
    repository: VehicleRepository,
    store: PgRecordStore,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            store: PgRecordStore::new(pool),
        }
    }

    /// Obtener el vehículo actual del repartidor
    pub async fn get(&self, driver_id: Uuid) -> AppResult<ApiResponse<VehicleResponse>> {
        let vehicle = self
            .repository
            .find_by_driver(driver_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not configured".to_string()))?;

        Ok(ApiResponse::success(vehicle.into()))
    }

    /// Actualizar los datos del vehículo (upsert)
    pub async fn update(
        &self,
        driver_id: Uuid,
        request: UpdateVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        request.validate()?;
        validate_plate(&request.plate)
            .map_err(|_| AppError::Validation("invalid plate format".to_string()))?;

        let vehicle = self
            .repository
            .upsert(
                driver_id,
                request.model,
                request.plate,
                request.shaken_expiry,
                request.next_oil_change_km,
            )
            .await?;
        info!("🚗 Vehículo actualizado: driver={}", driver_id);

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    /// Estado del cambio de aceite respecto al odómetro actual
    pub async fn maintenance(&self, driver_id: Uuid) -> AppResult<MaintenanceResponse> {
        let next_oil_change_km = self
            .repository
            .find_by_driver(driver_id)
            .await?
            .and_then(|v| v.next_oil_change_km);

        let deliveries = self.store.list_deliveries(driver_id).await?;
        let expenses = self.store.list_expenses(driver_id).await?;
        let current_km = metrics::latest_odometer(&deliveries, &expenses);

        let status = metrics::maintenance_status(current_km, next_oil_change_km);

        Ok(MaintenanceResponse {
            current_km,
            next_oil_change_km,
            status,
        })
    }
}
