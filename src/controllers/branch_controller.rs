use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::branch_dto::{BranchResponse, CreateBranchRequest, UpdateBranchRequest};
use crate::dto::common::ApiResponse;
use crate::models::branch::BranchStatus;
use crate::repositories::branch_repository::BranchRepository;
use crate::utils::errors::{conflict_error, AppError, AppResult};

pub struct BranchController {
    repository: BranchRepository,
}

impl BranchController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BranchRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateBranchRequest,
    ) -> AppResult<ApiResponse<BranchResponse>> {
        request.validate()?;

        // El código de sucursal es único
        if self.repository.code_exists(&request.code, None).await? {
            return Err(conflict_error("Branch", "code", &request.code));
        }

        let branch = self
            .repository
            .create(
                request.name,
                request.code,
                request.address,
                request.city,
                request.state,
                request.zip_code,
                request.phone,
                request.email,
                request.manager_name,
                request.opening_hours,
                request.established_date,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            branch.into(),
            "Sucursal creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<BranchResponse> {
        let branch = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Branch not found".to_string()))?;

        Ok(branch.into())
    }

    pub async fn list(&self) -> AppResult<Vec<BranchResponse>> {
        let branches = self.repository.find_all().await?;
        Ok(branches.into_iter().map(BranchResponse::from).collect())
    }

    pub async fn search(&self, keyword: &str) -> AppResult<Vec<BranchResponse>> {
        let branches = self.repository.search(keyword.trim()).await?;
        Ok(branches.into_iter().map(BranchResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateBranchRequest,
    ) -> AppResult<ApiResponse<BranchResponse>> {
        request.validate()?;

        if let Some(status) = &request.status {
            if BranchStatus::parse(status).is_none() {
                return Err(AppError::BadRequest(format!(
                    "Invalid status '{}', allowed values: ACTIVE, INACTIVE, MAINTENANCE",
                    status
                )));
            }
        }

        let branch = self
            .repository
            .update(
                id,
                request.name,
                request.address,
                request.city,
                request.state,
                request.zip_code,
                request.phone,
                request.email,
                request.manager_name,
                request.opening_hours,
                request.status,
                request.established_date,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            branch.into(),
            "Sucursal actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }
}
