//! Modelo de Rental
//!
//! Este módulo contiene el struct Rental, su ciclo de vida y la derivación
//! del estado OVERDUE. El estado persistido solo puede ser ACTIVE,
//! COMPLETED o CANCELLED; OVERDUE se calcula al construir la respuesta y
//! nunca se escribe en la base de datos.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado persistido de una reserva
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RentalStatus {
    Active,
    Completed,
    Cancelled,
}

impl RentalStatus {
    pub const ALL: [RentalStatus; 3] = [
        RentalStatus::Active,
        RentalStatus::Completed,
        RentalStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::Active => "ACTIVE",
            RentalStatus::Completed => "COMPLETED",
            RentalStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn parse(value: &str) -> Option<RentalStatus> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }

    /// COMPLETED y CANCELLED no tienen transiciones de salida
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RentalStatus::Active)
    }
}

/// Rental principal - mapea exactamente a la tabla rentals
#[derive(Debug, Clone, FromRow)]
pub struct Rental {
    pub id: Uuid,
    pub car_id: Uuid,
    pub customer_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub actual_return_date: Option<NaiveDate>,
    pub total_cost_cents: i64,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Rental {
    pub fn status(&self) -> RentalStatus {
        RentalStatus::parse(&self.status).unwrap_or(RentalStatus::Cancelled)
    }

    /// OVERDUE derivado: reserva ACTIVE cuya fecha de fin ya pasó.
    /// Una reserva COMPLETED o CANCELLED nunca es overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status() == RentalStatus::Active && self.end_date < today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rental(status: RentalStatus, end_date: NaiveDate) -> Rental {
        Rental {
            id: Uuid::new_v4(),
            car_id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            start_date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            end_date,
            actual_return_date: None,
            total_cost_cents: 22500,
            notes: None,
            status: status.as_str().to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_active_rental_past_end_date_is_overdue() {
        let end = NaiveDate::from_ymd_opt(2024, 2, 20).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 2, 21).unwrap();
        assert!(rental(RentalStatus::Active, end).is_overdue(today));
    }

    #[test]
    fn test_active_rental_on_end_date_is_not_overdue() {
        let end = NaiveDate::from_ymd_opt(2024, 2, 20).unwrap();
        assert!(!rental(RentalStatus::Active, end).is_overdue(end));
    }

    #[test]
    fn test_completed_rental_never_overdue() {
        let end = NaiveDate::from_ymd_opt(2024, 2, 20).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(!rental(RentalStatus::Completed, end).is_overdue(today));
        assert!(!rental(RentalStatus::Cancelled, end).is_overdue(today));
    }

    #[test]
    fn test_terminal_states() {
        assert!(!RentalStatus::Active.is_terminal());
        assert!(RentalStatus::Completed.is_terminal());
        assert!(RentalStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_overdue_is_never_a_persisted_status() {
        assert_eq!(RentalStatus::parse("OVERDUE"), None);
    }
}
