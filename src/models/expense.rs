//! Modelo de Expense
//!
//! Este módulo contiene el struct Expense (un gasto del repartidor) y el
//! enum de categorías. Mapea exactamente al schema PostgreSQL.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;
use validator::Validate;

/// Categoría del gasto - mapea al ENUM expense_category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "expense_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Fuel,
    Maintenance,
    Food,
    Parking,
    Toll,
    Insurance,
    Other,
}

/// Expense principal - mapea exactamente a la tabla expenses
///
/// Los litros solo tienen sentido en la categoría Fuel; el flag full_tank
/// solo es usable para el cálculo de autonomía cuando además liters > 0.
/// Un gasto es inmutable una vez creado.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub amount: Decimal,
    pub km: i64,
    pub liters: Option<Decimal>,
    pub full_tank: bool,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Repostaje con tanque lleno utilizable para el cálculo de autonomía
    pub fn is_full_tank_refuel(&self) -> bool {
        self.category == ExpenseCategory::Fuel
            && self.full_tank
            && self.liters.map_or(false, |l| l > Decimal::ZERO)
    }
}

/// Request para registrar un gasto
#[derive(Debug, Deserialize, Validate)]
pub struct CreateExpenseRequest {
    pub date: NaiveDate,

    pub category: ExpenseCategory,

    pub amount: Decimal,

    #[validate(range(min = 0))]
    pub km: i64,

    pub liters: Option<Decimal>,

    #[serde(default)]
    pub full_tank: bool,
}
