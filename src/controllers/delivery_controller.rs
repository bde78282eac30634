//! Controller de Delivery
//!
//! Orquesta el motor de ciclo de vida contra el store inyectado: lee el
//! snapshot del repartidor, aplica la transición pura y persiste el
//! resultado. Si el guardado falla el error se propaga y la transición no
//! ocurrió: el store es la única fuente de estado.

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::delivery_dto::DeliveryResponse;
use crate::dto::ApiResponse;
use crate::engine::lifecycle::{self, FinishDeliveryCommand, StartDeliveryCommand};
use crate::models::delivery::{FinishDeliveryRequest, StartDeliveryRequest};
use crate::store::RecordStore;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct DeliveryController<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> DeliveryController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Iniciar un bloque de entrega
    pub async fn start(
        &self,
        driver_id: Uuid,
        request: StartDeliveryRequest,
    ) -> AppResult<ApiResponse<DeliveryResponse>> {
        request.validate()?;

        let existing = self.store.list_deliveries(driver_id).await?;
        let delivery = lifecycle::start_delivery(
            &existing,
            StartDeliveryCommand {
                driver_id,
                date: request.date,
                platform: request.platform,
                warehouse: request.warehouse,
                start_time: request.start_time,
                start_km: request.start_km,
                prepaid_value: request.prepaid_value,
            },
        )?;

        self.store.save_delivery(&delivery).await?;
        info!(
            "🚚 Bloque iniciado: driver={} platform={} km={}",
            driver_id, delivery.platform, delivery.start_km
        );

        Ok(ApiResponse::success_with_message(
            delivery.into(),
            "Entrega iniciada exitosamente".to_string(),
        ))
    }

    /// Finalizar un bloque de entrega
    pub async fn finish(
        &self,
        driver_id: Uuid,
        delivery_id: Uuid,
        request: FinishDeliveryRequest,
    ) -> AppResult<ApiResponse<DeliveryResponse>> {
        request.validate()?;

        let delivery = self
            .store
            .find_delivery(delivery_id)
            .await?
            .ok_or_else(|| not_found_error("Delivery", &delivery_id.to_string()))?;

        if delivery.driver_id != driver_id {
            return Err(AppError::Forbidden(
                "Delivery does not belong to this driver".to_string(),
            ));
        }

        let finished = lifecycle::finish_delivery(
            &delivery,
            FinishDeliveryCommand {
                end_time: request.end_time,
                end_km: request.end_km,
                earned_value: request.earned_value,
            },
        )?;

        self.store.save_delivery(&finished).await?;
        info!(
            "✅ Bloque finalizado: driver={} km={}",
            driver_id, request.end_km
        );

        Ok(ApiResponse::success_with_message(
            finished.into(),
            "Entrega finalizada exitosamente".to_string(),
        ))
    }

    /// Listar los bloques del repartidor
    pub async fn list(&self, driver_id: Uuid) -> AppResult<Vec<DeliveryResponse>> {
        let deliveries = self.store.list_deliveries(driver_id).await?;
        Ok(deliveries.into_iter().map(DeliveryResponse::from).collect())
    }

    /// Bloque en curso del repartidor, si existe
    pub async fn active(&self, driver_id: Uuid) -> AppResult<Option<DeliveryResponse>> {
        let deliveries = self.store.list_deliveries(driver_id).await?;
        Ok(deliveries
            .into_iter()
            .find(|d| d.is_ongoing())
            .map(DeliveryResponse::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use chrono::{NaiveDate, NaiveTime};
    use rust_decimal::Decimal;

    fn start_request(platform: &str) -> StartDeliveryRequest {
        StartDeliveryRequest {
            date: NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
            platform: platform.to_string(),
            warehouse: None,
            start_time: NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
            start_km: 54200,
            prepaid_value: None,
        }
    }

    #[tokio::test]
    async fn test_start_then_finish_roundtrip() {
        let controller = DeliveryController::new(MemoryStore::new());
        let driver_id = Uuid::new_v4();

        let started = controller
            .start(driver_id, start_request("UberEats"))
            .await
            .unwrap()
            .data
            .unwrap();

        let active = controller.active(driver_id).await.unwrap();
        assert_eq!(active.map(|d| d.id), Some(started.id));

        let finished = controller
            .finish(
                driver_id,
                started.id,
                FinishDeliveryRequest {
                    end_time: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
                    end_km: 54350,
                    earned_value: Some(Decimal::from(9000)),
                },
            )
            .await
            .unwrap()
            .data
            .unwrap();

        assert_eq!(finished.distance, 150);
        assert!(controller.active(driver_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_second_start_conflicts_through_store() {
        let controller = DeliveryController::new(MemoryStore::new());
        let driver_id = Uuid::new_v4();

        controller
            .start(driver_id, start_request("UberEats"))
            .await
            .unwrap();

        let err = controller
            .start(driver_id, start_request("PickGo"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        // El snapshot nunca contiene dos bloques en curso
        let listed = controller.list(driver_id).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_finish_foreign_delivery_is_forbidden() {
        let store = MemoryStore::new();
        let controller = DeliveryController::new(store.clone());
        let owner = Uuid::new_v4();
        let intruder = Uuid::new_v4();

        let started = controller
            .start(owner, start_request("UberEats"))
            .await
            .unwrap()
            .data
            .unwrap();

        let err = controller
            .finish(
                intruder,
                started.id,
                FinishDeliveryRequest {
                    end_time: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
                    end_km: 54350,
                    earned_value: Some(Decimal::from(9000)),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_failed_validation_leaves_store_unchanged() {
        let controller = DeliveryController::new(MemoryStore::new());
        let driver_id = Uuid::new_v4();

        let started = controller
            .start(driver_id, start_request("UberEats"))
            .await
            .unwrap()
            .data
            .unwrap();

        // Odómetro final menor al inicial: rechazado y sin mutación
        let err = controller
            .finish(
                driver_id,
                started.id,
                FinishDeliveryRequest {
                    end_time: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
                    end_km: 54100,
                    earned_value: Some(Decimal::from(9000)),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let active = controller.active(driver_id).await.unwrap().unwrap();
        assert_eq!(active.end_km, None);
    }
}
