use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::expense_controller::ExpenseController;
use crate::dto::expense_dto::ExpenseResponse;
use crate::dto::ApiResponse;
use crate::middleware::auth::driver_id_from_headers;
use crate::models::expense::CreateExpenseRequest;
use crate::repositories::PgRecordStore;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_expense_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_expense))
        .route("/", get(list_expenses))
}

async fn create_expense(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateExpenseRequest>,
) -> Result<Json<ApiResponse<ExpenseResponse>>, AppError> {
    let driver_id = driver_id_from_headers(&headers)?;
    let controller = ExpenseController::new(PgRecordStore::new(state.pool.clone()));
    let response = controller.create(driver_id, request).await?;
    Ok(Json(response))
}

async fn list_expenses(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<ExpenseResponse>>, AppError> {
    let driver_id = driver_id_from_headers(&headers)?;
    let controller = ExpenseController::new(PgRecordStore::new(state.pool.clone()));
    let response = controller.list(driver_id).await?;
    Ok(Json(response))
}
