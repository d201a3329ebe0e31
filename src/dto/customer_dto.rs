use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::customer::Customer;
use crate::utils::validation::EMAIL_REGEX;

// Request para crear un cliente
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    #[validate(regex(path = "EMAIL_REGEX", message = "invalid email format"))]
    pub email: String,

    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub phone_number: String,

    #[validate(length(min = 5, max = 30))]
    pub driver_license: String,

    pub address: Option<String>,
}

// Request para actualizar un cliente
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,

    #[validate(regex(path = "EMAIL_REGEX", message = "invalid email format"))]
    pub email: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub phone_number: Option<String>,

    #[validate(length(min = 5, max = 30))]
    pub driver_license: Option<String>,

    pub address: Option<String>,
}

// Response de cliente
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub driver_license: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
            phone_number: customer.phone_number,
            driver_license: customer.driver_license,
            address: customer.address,
            created_at: customer.created_at,
        }
    }
}
