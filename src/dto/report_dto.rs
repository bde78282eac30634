//! DTOs del reporte

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::metrics::{ActivityTotals, ReportRow};
use crate::models::record::RecordKind;

/// Filtros del reporte via query string
#[derive(Debug, Deserialize, Default)]
pub struct ReportQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub kind: Option<RecordKind>,
}

/// Datos del reporte listos para que la capa de render arme el PDF
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub rows: Vec<ReportRow>,
    pub totals: ActivityTotals,
}
