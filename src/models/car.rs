//! Modelo de Car
//!
//! Este módulo contiene el struct Car y su enum de estado.
//! Mapea exactamente a la tabla cars del schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado del coche - se persiste como TEXT en la columna status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarStatus {
    Available,
    Rented,
    Maintenance,
    OutOfService,
}

impl CarStatus {
    pub const ALL: [CarStatus; 4] = [
        CarStatus::Available,
        CarStatus::Rented,
        CarStatus::Maintenance,
        CarStatus::OutOfService,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CarStatus::Available => "AVAILABLE",
            CarStatus::Rented => "RENTED",
            CarStatus::Maintenance => "MAINTENANCE",
            CarStatus::OutOfService => "OUT_OF_SERVICE",
        }
    }

    pub fn parse(value: &str) -> Option<CarStatus> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

/// Car principal - mapea exactamente a la tabla cars
#[derive(Debug, Clone, FromRow)]
pub struct Car {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub daily_rate_cents: i64,
    pub status: String,
    pub fuel_type: Option<String>,
    pub transmission_type: Option<String>,
    pub seating_capacity: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Car {
    /// Estado tipado; la columna solo puede contener valores del enum
    pub fn status(&self) -> CarStatus {
        CarStatus::parse(&self.status).unwrap_or(CarStatus::OutOfService)
    }

    pub fn is_available(&self) -> bool {
        self.status() == CarStatus::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in CarStatus::ALL {
            assert_eq!(CarStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        assert_eq!(CarStatus::parse("PARKED"), None);
        assert_eq!(CarStatus::parse("available"), None);
    }

    #[test]
    fn test_status_json_uses_screaming_snake_case() {
        let json = serde_json::to_string(&CarStatus::OutOfService).unwrap();
        assert_eq!(json, "\"OUT_OF_SERVICE\"");
    }
}
