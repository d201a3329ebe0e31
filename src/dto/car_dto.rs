use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::car::{Car, CarStatus};

// Request para crear un coche
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarRequest {
    #[validate(length(min = 1, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1950, max = 2030))]
    pub year: i32,

    #[validate(custom = "crate::utils::validation::validate_license_plate")]
    pub license_plate: String,

    #[validate(range(min = 1))]
    pub daily_rate_cents: i64,

    pub fuel_type: Option<String>,
    pub transmission_type: Option<String>,

    #[validate(range(min = 1, max = 20))]
    pub seating_capacity: Option<i32>,
}

// Request para actualizar un coche (campos opcionales)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarRequest {
    #[validate(length(min = 1, max = 100))]
    pub make: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1950, max = 2030))]
    pub year: Option<i32>,

    #[validate(custom = "crate::utils::validation::validate_license_plate")]
    pub license_plate: Option<String>,

    #[validate(range(min = 1))]
    pub daily_rate_cents: Option<i64>,

    pub fuel_type: Option<String>,
    pub transmission_type: Option<String>,

    #[validate(range(min = 1, max = 20))]
    pub seating_capacity: Option<i32>,
}

// Response de coche
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarResponse {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub daily_rate_cents: i64,
    pub status: CarStatus,
    pub fuel_type: Option<String>,
    pub transmission_type: Option<String>,
    pub seating_capacity: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        let status = car.status();
        Self {
            id: car.id,
            make: car.make,
            model: car.model,
            year: car.year,
            license_plate: car.license_plate,
            daily_rate_cents: car.daily_rate_cents,
            status,
            fuel_type: car.fuel_type,
            transmission_type: car.transmission_type,
            seating_capacity: car.seating_capacity,
            created_at: car.created_at,
            updated_at: car.updated_at,
        }
    }
}

// Query para filtrar por rango de tarifa diaria
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceFilterQuery {
    pub min_rate_cents: i64,
    pub max_rate_cents: i64,
}

// Query para cambio de estado
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: String,
}
