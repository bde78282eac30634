//! Controller de Reportes
//!
//! Produce la tabla y los totales que la capa de render usa para armar el
//! PDF. Sin límite de filas: el reporte lleva toda la actividad filtrada.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::dto::report_dto::{ReportQuery, ReportResponse};
use crate::engine::metrics::{self, ActivityFilter};
use crate::store::RecordStore;
use crate::utils::errors::{AppError, AppResult};

pub struct ReportController<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> ReportController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Filas y totales del reporte, con rango de fechas y tipo opcionales
    pub async fn report(&self, driver_id: Uuid, query: ReportQuery) -> AppResult<ReportResponse> {
        if let (Some(start), Some(end)) = (query.start, query.end) {
            if start > end {
                return Err(AppError::Validation(
                    "start date must not be after end date".to_string(),
                ));
            }
        }

        let range = match (query.start, query.end) {
            (None, None) => None,
            (start, end) => Some((
                start.unwrap_or(NaiveDate::MIN),
                end.unwrap_or(NaiveDate::MAX),
            )),
        };

        let deliveries = self.store.list_deliveries(driver_id).await?;
        let expenses = self.store.list_expenses(driver_id).await?;

        let filter = ActivityFilter {
            range,
            kind: query.kind,
            limit: None,
        };
        let activity = metrics::recent_activity(&deliveries, &expenses, &filter);

        Ok(ReportResponse {
            totals: metrics::activity_totals(&activity),
            rows: metrics::report_rows(&activity),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::delivery::{FinishDeliveryRequest, StartDeliveryRequest};
    use crate::models::expense::{CreateExpenseRequest, ExpenseCategory};
    use crate::controllers::delivery_controller::DeliveryController;
    use crate::controllers::expense_controller::ExpenseController;
    use crate::models::record::RecordKind;
    use crate::store::memory::MemoryStore;
    use chrono::NaiveTime;
    use rust_decimal::Decimal;

    async fn populated_store(driver_id: Uuid) -> MemoryStore {
        let store = MemoryStore::new();
        let deliveries = DeliveryController::new(store.clone());
        let expenses = ExpenseController::new(store.clone());

        let started = deliveries
            .start(
                driver_id,
                StartDeliveryRequest {
                    date: NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
                    platform: "Rappi".to_string(),
                    warehouse: None,
                    start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                    start_km: 1000,
                    prepaid_value: None,
                },
            )
            .await
            .unwrap()
            .data
            .unwrap();
        deliveries
            .finish(
                driver_id,
                started.id,
                FinishDeliveryRequest {
                    end_time: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
                    end_km: 1100,
                    earned_value: Some(Decimal::from(8000)),
                },
            )
            .await
            .unwrap();
        expenses
            .create(
                driver_id,
                CreateExpenseRequest {
                    date: NaiveDate::from_ymd_opt(2026, 8, 12).unwrap(),
                    category: ExpenseCategory::Toll,
                    amount: Decimal::from(1200),
                    km: 1100,
                    liters: None,
                    full_tank: false,
                },
            )
            .await
            .unwrap();

        store
    }

    #[tokio::test]
    async fn test_report_rows_and_totals() {
        let driver_id = Uuid::new_v4();
        let store = populated_store(driver_id).await;
        let controller = ReportController::new(store);

        let report = controller
            .report(driver_id, ReportQuery::default())
            .await
            .unwrap();

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.totals.earnings, Decimal::from(8000));
        assert_eq!(report.totals.expenses, Decimal::from(1200));
        assert_eq!(report.totals.balance, Decimal::from(6800));
    }

    #[tokio::test]
    async fn test_report_filters_by_kind_and_range() {
        let driver_id = Uuid::new_v4();
        let store = populated_store(driver_id).await;
        let controller = ReportController::new(store);

        let report = controller
            .report(
                driver_id,
                ReportQuery {
                    start: Some(NaiveDate::from_ymd_opt(2026, 8, 11).unwrap()),
                    end: None,
                    kind: Some(RecordKind::Expense),
                },
            )
            .await
            .unwrap();

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].kind, RecordKind::Expense);
    }

    #[tokio::test]
    async fn test_report_rejects_inverted_range() {
        let driver_id = Uuid::new_v4();
        let controller = ReportController::new(MemoryStore::new());

        let err = controller
            .report(
                driver_id,
                ReportQuery {
                    start: Some(NaiveDate::from_ymd_opt(2026, 8, 20).unwrap()),
                    end: Some(NaiveDate::from_ymd_opt(2026, 8, 10).unwrap()),
                    kind: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
