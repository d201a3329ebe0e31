use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::dashboard_dto::{DashboardStatsResponse, MonthlyEarningsResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(dashboard_stats))
        .route("/earnings", get(dashboard_earnings))
}

async fn dashboard_stats(
    State(state): State<AppState>,
) -> Result<Json<DashboardStatsResponse>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let response = controller.stats().await?;
    Ok(Json(response))
}

async fn dashboard_earnings(
    State(state): State<AppState>,
) -> Result<Json<Vec<MonthlyEarningsResponse>>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let response = controller.earnings().await?;
    Ok(Json(response))
}
