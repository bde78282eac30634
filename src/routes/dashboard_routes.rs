use axum::{extract::State, http::HeaderMap, routing::get, Json, Router};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::dashboard_dto::DashboardResponse;
use crate::middleware::auth::driver_id_from_headers;
use crate::repositories::PgRecordStore;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/", get(get_dashboard))
}

async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<DashboardResponse>, AppError> {
    let driver_id = driver_id_from_headers(&headers)?;
    let controller = DashboardController::new(PgRecordStore::new(state.pool.clone()));
    let response = controller.dashboard(driver_id).await?;
    Ok(Json(response))
}
