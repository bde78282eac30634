use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::delivery_controller::DeliveryController;
use crate::dto::delivery_dto::DeliveryResponse;
use crate::dto::ApiResponse;
use crate::middleware::auth::driver_id_from_headers;
use crate::models::delivery::{FinishDeliveryRequest, StartDeliveryRequest};
use crate::repositories::PgRecordStore;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_delivery_router() -> Router<AppState> {
    Router::new()
        .route("/start", post(start_delivery))
        .route("/:id/finish", post(finish_delivery))
        .route("/", get(list_deliveries))
        .route("/active", get(active_delivery))
}

async fn start_delivery(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<StartDeliveryRequest>,
) -> Result<Json<ApiResponse<DeliveryResponse>>, AppError> {
    let driver_id = driver_id_from_headers(&headers)?;
    let controller = DeliveryController::new(PgRecordStore::new(state.pool.clone()));
    let response = controller.start(driver_id, request).await?;
    Ok(Json(response))
}

async fn finish_delivery(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(request): Json<FinishDeliveryRequest>,
) -> Result<Json<ApiResponse<DeliveryResponse>>, AppError> {
    let driver_id = driver_id_from_headers(&headers)?;
    let controller = DeliveryController::new(PgRecordStore::new(state.pool.clone()));
    let response = controller.finish(driver_id, id, request).await?;
    Ok(Json(response))
}

async fn list_deliveries(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<DeliveryResponse>>, AppError> {
    let driver_id = driver_id_from_headers(&headers)?;
    let controller = DeliveryController::new(PgRecordStore::new(state.pool.clone()));
    let response = controller.list(driver_id).await?;
    Ok(Json(response))
}

async fn active_delivery(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Option<DeliveryResponse>>, AppError> {
    let driver_id = driver_id_from_headers(&headers)?;
    let controller = DeliveryController::new(PgRecordStore::new(state.pool.clone()));
    let response = controller.active(driver_id).await?;
    Ok(Json(response))
}
