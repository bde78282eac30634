//! Repositorio de Vehicle
//!
//! Un vehículo actual por repartidor, actualizado desde ajustes.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppResult;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_driver(&self, driver_id: Uuid) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE driver_id = $1")
            .bind(driver_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    /// Upsert del vehículo del repartidor
    pub async fn upsert(
        &self,
        driver_id: Uuid,
        model: String,
        plate: String,
        shaken_expiry: Option<chrono::NaiveDate>,
        next_oil_change_km: Option<i64>,
    ) -> AppResult<Vehicle> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, driver_id, model, plate, shaken_expiry, next_oil_change_km, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (driver_id) DO UPDATE
            SET model = EXCLUDED.model,
                plate = EXCLUDED.plate,
                shaken_expiry = EXCLUDED.shaken_expiry,
                next_oil_change_km = EXCLUDED.next_oil_change_km
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(driver_id)
        .bind(model)
        .bind(plate)
        .bind(shaken_expiry)
        .bind(next_oil_change_km)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }
}
