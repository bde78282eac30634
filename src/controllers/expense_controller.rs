//! Controller de Expense
//!
//! Alta y listado de gastos. Un gasto es inmutable una vez creado.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::expense_dto::ExpenseResponse;
use crate::dto::ApiResponse;
use crate::models::expense::{CreateExpenseRequest, Expense, ExpenseCategory};
use crate::store::RecordStore;
use crate::utils::errors::{AppError, AppResult};

pub struct ExpenseController<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> ExpenseController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Registrar un gasto
    pub async fn create(
        &self,
        driver_id: Uuid,
        request: CreateExpenseRequest,
    ) -> AppResult<ApiResponse<ExpenseResponse>> {
        request.validate()?;

        if request.amount < Decimal::ZERO {
            return Err(AppError::Validation(
                "amount must be non-negative".to_string(),
            ));
        }

        // Los litros solo existen en gastos de combustible
        if request.liters.is_some() && request.category != ExpenseCategory::Fuel {
            return Err(AppError::Validation(
                "liters are only valid for fuel expenses".to_string(),
            ));
        }
        if let Some(liters) = request.liters {
            if liters <= Decimal::ZERO {
                return Err(AppError::Validation(
                    "liters must be greater than zero".to_string(),
                ));
            }
        }

        // Tanque lleno implica repostaje de combustible con litros
        if request.full_tank && (request.category != ExpenseCategory::Fuel || request.liters.is_none()) {
            return Err(AppError::Validation(
                "full tank only applies to fuel expenses with liters".to_string(),
            ));
        }

        let expense = Expense {
            id: Uuid::new_v4(),
            driver_id,
            date: request.date,
            category: request.category,
            amount: request.amount,
            km: request.km,
            liters: request.liters,
            full_tank: request.full_tank,
            created_at: Utc::now(),
        };

        self.store.save_expense(&expense).await?;
        info!(
            "💸 Gasto registrado: driver={} category={:?} amount={}",
            driver_id, expense.category, expense.amount
        );

        Ok(ApiResponse::success_with_message(
            expense.into(),
            "Gasto registrado exitosamente".to_string(),
        ))
    }

    /// Listar los gastos del repartidor
    pub async fn list(&self, driver_id: Uuid) -> AppResult<Vec<ExpenseResponse>> {
        let expenses = self.store.list_expenses(driver_id).await?;
        Ok(expenses.into_iter().map(ExpenseResponse::from).collect())
    }
}
