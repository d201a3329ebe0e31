//! Modelo de Customer
//!
//! Mapea exactamente a la tabla customers.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Customer {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub driver_license: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}
