use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::branch::{Branch, BranchStatus};
use crate::utils::validation::EMAIL_REGEX;

// Request para crear una sucursal
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBranchRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 2, max = 10))]
    pub code: String,

    #[validate(length(min = 1, max = 200))]
    pub address: String,

    #[validate(length(min = 1, max = 100))]
    pub city: String,

    #[validate(length(min = 1, max = 50))]
    pub state: String,

    #[validate(length(min = 3, max = 12))]
    pub zip_code: String,

    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub phone: String,

    #[validate(regex(path = "EMAIL_REGEX", message = "invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, max = 100))]
    pub manager_name: String,

    pub opening_hours: Option<String>,
    pub established_date: Option<NaiveDate>,
}

// Request para actualizar una sucursal
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBranchRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub address: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub city: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub state: Option<String>,

    #[validate(length(min = 3, max = 12))]
    pub zip_code: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub phone: Option<String>,

    #[validate(regex(path = "EMAIL_REGEX", message = "invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub manager_name: Option<String>,

    pub opening_hours: Option<String>,
    pub status: Option<String>,
    pub established_date: Option<NaiveDate>,
}

// Response de sucursal
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchResponse {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub email: String,
    pub manager_name: String,
    pub opening_hours: Option<String>,
    pub status: BranchStatus,
    pub established_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl From<Branch> for BranchResponse {
    fn from(branch: Branch) -> Self {
        let status = BranchStatus::parse(&branch.status).unwrap_or(BranchStatus::Inactive);
        Self {
            id: branch.id,
            name: branch.name,
            code: branch.code,
            address: branch.address,
            city: branch.city,
            state: branch.state,
            zip_code: branch.zip_code,
            phone: branch.phone,
            email: branch.email,
            manager_name: branch.manager_name,
            opening_hours: branch.opening_hours,
            status,
            established_date: branch.established_date,
            created_at: branch.created_at,
        }
    }
}
