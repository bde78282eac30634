//! DTOs de Delivery

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::models::delivery::{Delivery, DeliveryStatus};

/// Response de un bloque de entrega
#[derive(Debug, Serialize)]
pub struct DeliveryResponse {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub date: NaiveDate,
    pub platform: String,
    pub warehouse: Option<String>,
    pub start_time: NaiveTime,
    pub end_time: Option<NaiveTime>,
    pub start_km: i64,
    pub end_km: Option<i64>,
    pub value: Option<Decimal>,
    pub status: DeliveryStatus,
    /// Km recorridos; 0 mientras el bloque sigue abierto
    pub distance: i64,
}

impl From<Delivery> for DeliveryResponse {
    fn from(delivery: Delivery) -> Self {
        let distance = delivery.distance();
        Self {
            id: delivery.id,
            driver_id: delivery.driver_id,
            date: delivery.date,
            platform: delivery.platform,
            warehouse: delivery.warehouse,
            start_time: delivery.start_time,
            end_time: delivery.end_time,
            start_km: delivery.start_km,
            end_km: delivery.end_km,
            value: delivery.value,
            status: delivery.status,
            distance,
        }
    }
}
