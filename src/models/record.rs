//! Registro mixto de actividad
//!
//! Unión etiquetada de Delivery y Expense para las vistas que mezclan ambas
//! colecciones (actividad reciente, filas del reporte). El tag 'kind' viaja
//! en el JSON para que el cliente distinga cada fila.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::delivery::Delivery;
use super::expense::Expense;

/// Tipo de registro, usable como filtro en las vistas mixtas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Delivery,
    Expense,
}

/// Un registro de actividad: entrega o gasto
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Delivery(Delivery),
    Expense(Expense),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Delivery(_) => RecordKind::Delivery,
            Record::Expense(_) => RecordKind::Expense,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Record::Delivery(d) => d.id,
            Record::Expense(e) => e.id,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Record::Delivery(d) => d.date,
            Record::Expense(e) => e.date,
        }
    }

    /// Monto del registro; una entrega sin valor aún no tiene ingreso
    pub fn amount(&self) -> Decimal {
        match self {
            Record::Delivery(d) => d.value.unwrap_or(Decimal::ZERO),
            Record::Expense(e) => e.amount,
        }
    }
}
