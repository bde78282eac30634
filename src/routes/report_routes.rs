use axum::{
    extract::{Query, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};

use crate::controllers::report_controller::ReportController;
use crate::dto::report_dto::{ReportQuery, ReportResponse};
use crate::middleware::auth::driver_id_from_headers;
use crate::repositories::PgRecordStore;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new().route("/", get(get_report))
}

async fn get_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ReportResponse>, AppError> {
    let driver_id = driver_id_from_headers(&headers)?;
    let controller = ReportController::new(PgRecordStore::new(state.pool.clone()));
    let response = controller.report(driver_id, query).await?;
    Ok(Json(response))
}
