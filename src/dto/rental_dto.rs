use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::rental::{Rental, RentalStatus};

// Request para crear una reserva
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentalRequest {
    pub car_id: Uuid,
    pub customer_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

// Request para actualizar una reserva ACTIVE (fechas y notas;
// el estado solo cambia por los endpoints de transición)
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRentalRequest {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,

    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

// Response de reserva; overdue es derivado, nunca persistido
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalResponse {
    pub id: Uuid,
    pub car_id: Uuid,
    pub customer_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub actual_return_date: Option<NaiveDate>,
    pub total_cost_cents: i64,
    pub notes: Option<String>,
    pub status: RentalStatus,
    pub overdue: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RentalResponse {
    /// Construye la respuesta derivando overdue contra la fecha dada
    pub fn from_rental(rental: Rental, today: NaiveDate) -> Self {
        let status = rental.status();
        let overdue = rental.is_overdue(today);
        Self {
            id: rental.id,
            car_id: rental.car_id,
            customer_id: rental.customer_id,
            start_date: rental.start_date,
            end_date: rental.end_date,
            actual_return_date: rental.actual_return_date,
            total_cost_cents: rental.total_cost_cents,
            notes: rental.notes,
            status,
            overdue,
            created_at: rental.created_at,
            updated_at: rental.updated_at,
        }
    }
}

// Query del endpoint de completar reserva
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteRentalQuery {
    pub actual_return_date: NaiveDate,
}

// Query para listar reservas por rango de fecha de inicio
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

// Query del presupuesto de coste
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateCostQuery {
    pub car_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
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
    fn test_active_past_due_renders_overdue() {
        let end = NaiveDate::from_ymd_opt(2024, 2, 20).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let response = RentalResponse::from_rental(rental(RentalStatus::Active, end), today);
        assert!(response.overdue);
        assert_eq!(response.status, RentalStatus::Active);
    }

    #[test]
    fn test_completed_never_renders_overdue() {
        let end = NaiveDate::from_ymd_opt(2024, 2, 20).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let response = RentalResponse::from_rental(rental(RentalStatus::Completed, end), today);
        assert!(!response.overdue);
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let end = NaiveDate::from_ymd_opt(2024, 2, 20).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        let response = RentalResponse::from_rental(rental(RentalStatus::Active, end), today);
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("totalCostCents").is_some());
        assert!(json.get("actualReturnDate").is_some());
        assert!(json.get("total_cost_cents").is_none());
    }
}
