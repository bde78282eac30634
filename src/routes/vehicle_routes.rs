use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, put},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{MaintenanceResponse, VehicleResponse};
use crate::dto::ApiResponse;
use crate::middleware::auth::driver_id_from_headers;
use crate::models::vehicle::UpdateVehicleRequest;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_vehicle))
        .route("/", put(update_vehicle))
        .route("/maintenance", get(maintenance_status))
}

async fn get_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let driver_id = driver_id_from_headers(&headers)?;
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get(driver_id).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let driver_id = driver_id_from_headers(&headers)?;
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update(driver_id, request).await?;
    Ok(Json(response))
}

async fn maintenance_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MaintenanceResponse>, AppError> {
    let driver_id = driver_id_from_headers(&headers)?;
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.maintenance(driver_id).await?;
    Ok(Json(response))
}
