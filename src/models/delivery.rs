//! Modelo de Delivery
//!
//! Este módulo contiene el struct Delivery (un bloque de trabajo de un
//! repartidor) y sus variantes para CRUD operations. Mapea exactamente al
//! schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;
use validator::Validate;

/// Estado del bloque de entrega - mapea al ENUM delivery_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "delivery_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Ongoing,
    Completed,
}

/// Delivery principal - mapea exactamente a la tabla deliveries
///
/// Un bloque queda en estado Ongoing al iniciarse y pasa una única vez a
/// Completed, con odómetro y hora finales. Nunca al revés.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Delivery {
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
    pub created_at: DateTime<Utc>,
}

impl Delivery {
    /// Kilómetros recorridos en el bloque, 0 si aún no hay odómetro final
    pub fn distance(&self) -> i64 {
        match self.end_km {
            Some(end_km) => end_km - self.start_km,
            None => 0,
        }
    }

    pub fn is_ongoing(&self) -> bool {
        self.status == DeliveryStatus::Ongoing
    }
}

/// Request para iniciar un bloque de entrega
#[derive(Debug, Deserialize, Validate)]
pub struct StartDeliveryRequest {
    pub date: NaiveDate,

    #[validate(length(min = 1, max = 100))]
    pub platform: String,

    #[validate(length(min = 1, max = 100))]
    pub warehouse: Option<String>,

    pub start_time: NaiveTime,

    #[validate(range(min = 0))]
    pub start_km: i64,

    pub prepaid_value: Option<Decimal>,
}

/// Request para finalizar un bloque de entrega
#[derive(Debug, Deserialize, Validate)]
pub struct FinishDeliveryRequest {
    pub end_time: NaiveTime,

    #[validate(range(min = 0))]
    pub end_km: i64,

    pub earned_value: Option<Decimal>,
}
