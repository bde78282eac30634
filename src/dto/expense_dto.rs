//! DTOs de Expense

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::models::expense::{Expense, ExpenseCategory};

/// Response de un gasto
#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub amount: Decimal,
    pub km: i64,
    pub liters: Option<Decimal>,
    pub full_tank: bool,
}

impl From<Expense> for ExpenseResponse {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            driver_id: expense.driver_id,
            date: expense.date,
            category: expense.category,
            amount: expense.amount,
            km: expense.km,
            liters: expense.liters,
            full_tank: expense.full_tank,
        }
    }
}
