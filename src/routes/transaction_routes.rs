use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::transaction_controller::TransactionController;
use crate::dto::common::ApiResponse;
use crate::dto::transaction_dto::{
    CreateTransactionRequest, TransactionListQuery, TransactionResponse,
    TransactionSummaryResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_transaction_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_transaction))
        .route("/", get(list_transactions))
        .route("/summary", get(transaction_summary))
        .route("/:id", get(get_transaction))
}

async fn create_transaction(
    State(state): State<AppState>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<Json<ApiResponse<TransactionResponse>>, AppError> {
    let controller = TransactionController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<TransactionListQuery>,
) -> Result<Json<Vec<TransactionResponse>>, AppError> {
    let controller = TransactionController::new(state.pool.clone());
    let response = controller
        .list(query.entry_type.as_deref(), query.start_date, query.end_date)
        .await?;
    Ok(Json(response))
}

async fn transaction_summary(
    State(state): State<AppState>,
) -> Result<Json<TransactionSummaryResponse>, AppError> {
    let controller = TransactionController::new(state.pool.clone());
    let response = controller.summary().await?;
    Ok(Json(response))
}

async fn get_transaction(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TransactionResponse>, AppError> {
    let controller = TransactionController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}
