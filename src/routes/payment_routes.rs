use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::payment_controller::PaymentController;
use crate::dto::common::ApiResponse;
use crate::dto::payment_dto::{
    CreatePaymentMethodRequest, CreatePaymentRequest, PaymentListQuery, PaymentMethodResponse,
    PaymentResponse, UpdatePaymentMethodRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_payment_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_payment))
        .route("/", get(list_payments))
        .route("/methods", post(create_payment_method))
        .route("/methods", get(list_payment_methods))
        .route("/methods/:id", get(get_payment_method))
        .route("/methods/:id", put(update_payment_method))
        .route("/methods/:id", delete(delete_payment_method))
        .route("/methods/:id/default", patch(set_default_payment_method))
        .route("/:id", get(get_payment))
}

async fn create_payment(
    State(state): State<AppState>,
    Json(request): Json<CreatePaymentRequest>,
) -> Result<Json<ApiResponse<PaymentResponse>>, AppError> {
    let controller = PaymentController::new(state.pool.clone());
    let response = controller.create_payment(request).await?;
    Ok(Json(response))
}

async fn list_payments(
    State(state): State<AppState>,
    Query(query): Query<PaymentListQuery>,
) -> Result<Json<Vec<PaymentResponse>>, AppError> {
    let controller = PaymentController::new(state.pool.clone());
    let response = controller.list_payments(query.status.as_deref()).await?;
    Ok(Json(response))
}

async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PaymentResponse>, AppError> {
    let controller = PaymentController::new(state.pool.clone());
    let response = controller.get_payment(id).await?;
    Ok(Json(response))
}

async fn create_payment_method(
    State(state): State<AppState>,
    Json(request): Json<CreatePaymentMethodRequest>,
) -> Result<Json<ApiResponse<PaymentMethodResponse>>, AppError> {
    let controller = PaymentController::new(state.pool.clone());
    let response = controller.create_method(request).await?;
    Ok(Json(response))
}

async fn list_payment_methods(
    State(state): State<AppState>,
) -> Result<Json<Vec<PaymentMethodResponse>>, AppError> {
    let controller = PaymentController::new(state.pool.clone());
    let response = controller.list_methods().await?;
    Ok(Json(response))
}

async fn get_payment_method(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PaymentMethodResponse>, AppError> {
    let controller = PaymentController::new(state.pool.clone());
    let response = controller.get_method(id).await?;
    Ok(Json(response))
}

async fn update_payment_method(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePaymentMethodRequest>,
) -> Result<Json<ApiResponse<PaymentMethodResponse>>, AppError> {
    let controller = PaymentController::new(state.pool.clone());
    let response = controller.update_method(id, request).await?;
    Ok(Json(response))
}

async fn set_default_payment_method(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PaymentMethodResponse>, AppError> {
    let controller = PaymentController::new(state.pool.clone());
    let response = controller.set_default_method(id).await?;
    Ok(Json(response))
}

async fn delete_payment_method(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = PaymentController::new(state.pool.clone());
    controller.delete_method(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Método de pago eliminado exitosamente"
    })))
}
