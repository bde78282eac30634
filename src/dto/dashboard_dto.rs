//! DTOs del dashboard

use rust_decimal::Decimal;
use serde::Serialize;

use crate::engine::metrics::DailyPoint;
use crate::models::record::Record;

/// Tarjetas de estadísticas del panel general
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub balance: Decimal,
    pub total_km: i64,
    pub completed_deliveries: usize,
    pub total_expenses: Decimal,
    /// km/l entre los dos últimos tanques llenos; null = "N/A"
    pub autonomy: Option<Decimal>,
}

/// Response completa del dashboard: tarjetas, gráfico y actividad reciente
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub chart: Vec<DailyPoint>,
    pub recent: Vec<Record>,
}
