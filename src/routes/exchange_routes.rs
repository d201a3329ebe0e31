use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::exchange_controller::ExchangeController;
use crate::dto::exchange_dto::{ConversionResponse, ConvertQuery, RateResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_exchange_router() -> Router<AppState> {
    Router::new()
        .route("/rates", get(list_rates))
        .route("/convert", get(convert))
}

async fn list_rates(State(state): State<AppState>) -> Json<Vec<RateResponse>> {
    let controller = ExchangeController::new(state.rates.clone());
    Json(controller.list_rates())
}

async fn convert(
    State(state): State<AppState>,
    Query(query): Query<ConvertQuery>,
) -> Result<Json<ConversionResponse>, AppError> {
    let controller = ExchangeController::new(state.rates.clone());
    let response = controller.convert(query.amount, &query.from, &query.to)?;
    Ok(Json(response))
}
