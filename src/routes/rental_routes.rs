use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::rental_controller::RentalController;
use crate::dto::common::ApiResponse;
use crate::dto::rental_dto::{
    CalculateCostQuery, CompleteRentalQuery, CreateRentalRequest, DateRangeQuery, RentalResponse,
    UpdateRentalRequest,
};
use crate::services::pricing::CostQuote;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_rental_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_rental))
        .route("/", get(list_rentals))
        .route("/overdue", get(list_overdue_rentals))
        .route("/date-range", get(list_rentals_by_date_range))
        .route("/calculate-cost", get(calculate_rental_cost))
        .route("/status/:status", get(list_rentals_by_status))
        .route("/customer/:customerId", get(list_rentals_by_customer))
        .route("/car/:carId", get(list_rentals_by_car))
        .route("/:id", get(get_rental))
        .route("/:id", put(update_rental))
        .route("/:id", delete(delete_rental))
        .route("/:id/complete", patch(complete_rental))
        .route("/:id/cancel", patch(cancel_rental))
}

async fn create_rental(
    State(state): State<AppState>,
    Json(request): Json<CreateRentalRequest>,
) -> Result<Json<ApiResponse<RentalResponse>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_rentals(
    State(state): State<AppState>,
) -> Result<Json<Vec<RentalResponse>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn list_overdue_rentals(
    State(state): State<AppState>,
) -> Result<Json<Vec<RentalResponse>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller.list_overdue().await?;
    Ok(Json(response))
}

async fn list_rentals_by_date_range(
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> Result<Json<Vec<RentalResponse>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller
        .list_by_date_range(query.start_date, query.end_date)
        .await?;
    Ok(Json(response))
}

async fn calculate_rental_cost(
    State(state): State<AppState>,
    Query(query): Query<CalculateCostQuery>,
) -> Result<Json<CostQuote>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller
        .calculate_cost(query.car_id, query.start_date, query.end_date)
        .await?;
    Ok(Json(response))
}

async fn list_rentals_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Json<Vec<RentalResponse>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller.list_by_status(&status).await?;
    Ok(Json(response))
}

async fn list_rentals_by_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
) -> Result<Json<Vec<RentalResponse>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller.list_by_customer(customer_id).await?;
    Ok(Json(response))
}

async fn list_rentals_by_car(
    State(state): State<AppState>,
    Path(car_id): Path<Uuid>,
) -> Result<Json<Vec<RentalResponse>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller.list_by_car(car_id).await?;
    Ok(Json(response))
}

async fn get_rental(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RentalResponse>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_rental(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRentalRequest>,
) -> Result<Json<ApiResponse<RentalResponse>>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn complete_rental(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<CompleteRentalQuery>,
) -> Result<Json<RentalResponse>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller.complete(id, query.actual_return_date).await?;
    Ok(Json(response))
}

async fn cancel_rental(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RentalResponse>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    let response = controller.cancel(id).await?;
    Ok(Json(response))
}

async fn delete_rental(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = RentalController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Reserva eliminada exitosamente"
    })))
}
