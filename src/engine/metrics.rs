//! Motor de métricas
//!
//! Agregación pura y de solo lectura sobre las colecciones de un repartidor.
//! Todas las funciones son deterministas sobre sus argumentos: sin estado,
//! sin efectos, seguras de recomputar en cada render o reporte. Cuando una
//! métrica no puede calcularse (historial de combustible insuficiente) el
//! resultado es None y el cliente lo muestra como "N/A"; nunca es un error.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::delivery::{Delivery, DeliveryStatus};
use crate::models::expense::Expense;
use crate::models::record::{Record, RecordKind};

/// Margen de aviso del cambio de aceite, en km
pub const OIL_CHANGE_WARNING_KM: i64 = 500;

/// Estado del cambio de aceite
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceStatus {
    Ok,
    Warning,
    Expired,
}

/// Punto de la serie diaria del gráfico de performance
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    /// Etiqueta corta "DD/MM" para el eje X
    pub label: String,
    pub earnings: Decimal,
    pub expenses: Decimal,
}

/// Filtro de la vista de actividad mixta
#[derive(Debug, Clone, Default)]
pub struct ActivityFilter {
    /// Rango de fechas inclusivo [start, end]
    pub range: Option<(NaiveDate, NaiveDate)>,
    pub kind: Option<RecordKind>,
    pub limit: Option<usize>,
}

/// Fila de la tabla del reporte (el renderizado PDF queda fuera)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportRow {
    pub date: NaiveDate,
    pub kind: RecordKind,
    /// Plataforma (entregas) o categoría (gastos)
    pub description: String,
    /// Estado del bloque u odómetro del gasto
    pub detail: String,
    pub amount: Decimal,
}

/// Totales de un conjunto de registros de actividad
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActivityTotals {
    pub earnings: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

/// Ingresos totales (una entrega sin valor todavía aporta 0)
pub fn total_earnings(deliveries: &[Delivery]) -> Decimal {
    deliveries
        .iter()
        .map(|d| d.value.unwrap_or(Decimal::ZERO))
        .sum()
}

/// Gastos totales
pub fn total_expenses(expenses: &[Expense]) -> Decimal {
    expenses.iter().map(|e| e.amount).sum()
}

/// Balance = ingresos - gastos, sin filtrar por estado
pub fn total_balance(deliveries: &[Delivery], expenses: &[Expense]) -> Decimal {
    total_earnings(deliveries) - total_expenses(expenses)
}

/// Km recorridos; bloques sin odómetro final aportan 0
pub fn total_distance(deliveries: &[Delivery]) -> i64 {
    deliveries.iter().map(|d| d.distance()).sum()
}

/// Cantidad de bloques completados
pub fn completed_count(deliveries: &[Delivery]) -> usize {
    deliveries
        .iter()
        .filter(|d| d.status == DeliveryStatus::Completed)
        .count()
}

/// Autonomía de combustible en km por litro
///
/// Se calcula entre los dos repostajes a tanque lleno más recientes:
/// km recorridos entre ambos divididos por los litros del último, a 2
/// decimales. Con menos de dos repostajes calificados, o con odómetro no
/// creciente entre ellos, no hay autonomía calculable.
pub fn fuel_autonomy(expenses: &[Expense]) -> Option<Decimal> {
    let mut refuels: Vec<&Expense> = expenses
        .iter()
        .filter(|e| e.is_full_tank_refuel())
        .collect();
    refuels.sort_by(|a, b| b.date.cmp(&a.date));

    if refuels.len() < 2 {
        return None;
    }

    let current = refuels[0];
    let previous = refuels[1];

    let km_traveled = current.km - previous.km;
    if km_traveled <= 0 {
        return None;
    }

    let liters = current.liters?;
    Some((Decimal::from(km_traveled) / liters).round_dp(2))
}

/// Estado del cambio de aceite respecto al odómetro actual
///
/// Sin próximo cambio registrado, o sin ninguna lectura de odómetro, no hay
/// nada que vigilar y el estado es "ok". Clasificación de tres vías con
/// umbral fijo de 500 km, sin histéresis.
pub fn maintenance_status(
    current_km: Option<i64>,
    next_change_km: Option<i64>,
) -> MaintenanceStatus {
    let (current_km, next_change_km) = match (current_km, next_change_km) {
        (Some(current), Some(next)) => (current, next),
        _ => return MaintenanceStatus::Ok,
    };

    let remaining = next_change_km - current_km;
    if remaining <= 0 {
        MaintenanceStatus::Expired
    } else if remaining <= OIL_CHANGE_WARNING_KM {
        MaintenanceStatus::Warning
    } else {
        MaintenanceStatus::Ok
    }
}

/// Lectura de odómetro más alta registrada, de entregas o gastos
pub fn latest_odometer(deliveries: &[Delivery], expenses: &[Expense]) -> Option<i64> {
    let delivery_km = deliveries
        .iter()
        .flat_map(|d| [Some(d.start_km), d.end_km])
        .flatten();
    let expense_km = expenses.iter().map(|e| e.km);

    delivery_km.chain(expense_km).max()
}

/// Serie diaria de los últimos `days` días terminando en `today`
///
/// Un punto por fecha, del más antiguo al más reciente; días sin registros
/// producen (0, 0).
pub fn daily_series(
    deliveries: &[Delivery],
    expenses: &[Expense],
    days: usize,
    today: NaiveDate,
) -> Vec<DailyPoint> {
    (0..days)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset as i64);
            let earnings = deliveries
                .iter()
                .filter(|d| d.date == date)
                .map(|d| d.value.unwrap_or(Decimal::ZERO))
                .sum();
            let day_expenses = expenses
                .iter()
                .filter(|e| e.date == date)
                .map(|e| e.amount)
                .sum();

            DailyPoint {
                date,
                label: date.format("%d/%m").to_string(),
                earnings,
                expenses: day_expenses,
            }
        })
        .collect()
}

/// Actividad mezclada de entregas y gastos, más reciente primero
///
/// El orden por fecha es estable: a igual fecha se conserva el orden de
/// inserción (entregas antes que gastos, cada colección en su orden).
pub fn recent_activity(
    deliveries: &[Delivery],
    expenses: &[Expense],
    filter: &ActivityFilter,
) -> Vec<Record> {
    let mut combined: Vec<Record> = deliveries
        .iter()
        .cloned()
        .map(Record::Delivery)
        .chain(expenses.iter().cloned().map(Record::Expense))
        .collect();

    if let Some((start, end)) = filter.range {
        combined.retain(|r| r.date() >= start && r.date() <= end);
    }
    if let Some(kind) = filter.kind {
        combined.retain(|r| r.kind() == kind);
    }

    // sort_by es estable: los empates de fecha quedan en orden de inserción
    combined.sort_by(|a, b| b.date().cmp(&a.date()));

    if let Some(limit) = filter.limit {
        combined.truncate(limit);
    }
    combined
}

/// Filas del reporte a partir de la actividad filtrada
pub fn report_rows(records: &[Record]) -> Vec<ReportRow> {
    records
        .iter()
        .map(|record| match record {
            Record::Delivery(d) => ReportRow {
                date: d.date,
                kind: RecordKind::Delivery,
                description: d.platform.clone(),
                detail: match d.status {
                    DeliveryStatus::Ongoing => "ongoing".to_string(),
                    DeliveryStatus::Completed => "completed".to_string(),
                },
                amount: d.value.unwrap_or(Decimal::ZERO),
            },
            Record::Expense(e) => ReportRow {
                date: e.date,
                kind: RecordKind::Expense,
                description: format!("{:?}", e.category).to_lowercase(),
                detail: format!("km {}", e.km),
                amount: e.amount,
            },
        })
        .collect()
}

/// Totales de ingresos/gastos/balance de un conjunto de registros
pub fn activity_totals(records: &[Record]) -> ActivityTotals {
    let earnings: Decimal = records
        .iter()
        .filter(|r| r.kind() == RecordKind::Delivery)
        .map(|r| r.amount())
        .sum();
    let expenses: Decimal = records
        .iter()
        .filter(|r| r.kind() == RecordKind::Expense)
        .map(|r| r.amount())
        .sum();

    ActivityTotals {
        earnings,
        expenses,
        balance: earnings - expenses,
    }
}
