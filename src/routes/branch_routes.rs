use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::branch_controller::BranchController;
use crate::dto::branch_dto::{BranchResponse, CreateBranchRequest, UpdateBranchRequest};
use crate::dto::common::{ApiResponse, KeywordQuery};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_branch_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_branch))
        .route("/", get(list_branches))
        .route("/search", get(search_branches))
        .route("/:id", get(get_branch))
        .route("/:id", put(update_branch))
        .route("/:id", delete(delete_branch))
}

async fn create_branch(
    State(state): State<AppState>,
    Json(request): Json<CreateBranchRequest>,
) -> Result<Json<ApiResponse<BranchResponse>>, AppError> {
    let controller = BranchController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_branches(
    State(state): State<AppState>,
) -> Result<Json<Vec<BranchResponse>>, AppError> {
    let controller = BranchController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn search_branches(
    State(state): State<AppState>,
    Query(query): Query<KeywordQuery>,
) -> Result<Json<Vec<BranchResponse>>, AppError> {
    let controller = BranchController::new(state.pool.clone());
    let response = controller.search(&query.keyword).await?;
    Ok(Json(response))
}

async fn get_branch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BranchResponse>, AppError> {
    let controller = BranchController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_branch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBranchRequest>,
) -> Result<Json<ApiResponse<BranchResponse>>, AppError> {
    let controller = BranchController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_branch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = BranchController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Sucursal eliminada exitosamente"
    })))
}
