//! Controller del Dashboard
//!
//! Recalcula las métricas del panel sobre el snapshot actual del store en
//! cada request; no hay caché ni invalidación.

use chrono::Utc;
use uuid::Uuid;

use crate::dto::dashboard_dto::{DashboardResponse, DashboardStats};
use crate::engine::metrics::{self, ActivityFilter};
use crate::store::RecordStore;
use crate::utils::errors::AppResult;

/// Días del gráfico de performance
const CHART_DAYS: usize = 7;
/// Registros de la lista de actividad reciente
const RECENT_LIMIT: usize = 5;

pub struct DashboardController<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> DashboardController<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Tarjetas, gráfico de 7 días y últimos 5 registros del repartidor
    pub async fn dashboard(&self, driver_id: Uuid) -> AppResult<DashboardResponse> {
        let deliveries = self.store.list_deliveries(driver_id).await?;
        let expenses = self.store.list_expenses(driver_id).await?;

        let stats = DashboardStats {
            balance: metrics::total_balance(&deliveries, &expenses),
            total_km: metrics::total_distance(&deliveries),
            completed_deliveries: metrics::completed_count(&deliveries),
            total_expenses: metrics::total_expenses(&expenses),
            autonomy: metrics::fuel_autonomy(&expenses),
        };

        let today = Utc::now().date_naive();
        let chart = metrics::daily_series(&deliveries, &expenses, CHART_DAYS, today);

        let filter = ActivityFilter {
            limit: Some(RECENT_LIMIT),
            ..Default::default()
        };
        let recent = metrics::recent_activity(&deliveries, &expenses, &filter);

        Ok(DashboardResponse {
            stats,
            chart,
            recent,
        })
    }
}
