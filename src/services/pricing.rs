//! Cálculo de costes de alquiler
//!
//! Todo el dinero se maneja en centavos (i64); nunca en punto flotante.
//! Un rango de fechas no positivo se rechaza siempre: jamás se factura
//! como cero.

use chrono::NaiveDate;
use serde::Serialize;

use crate::utils::errors::{validation_error, AppError, AppResult};

/// Desglose del coste de un alquiler
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CostQuote {
    pub days: i64,
    pub daily_rate_cents: i64,
    pub total_cost_cents: i64,
}

/// Días facturables entre dos fechas de calendario.
/// end_date debe ser estrictamente posterior a start_date.
pub fn rental_days(start_date: NaiveDate, end_date: NaiveDate) -> AppResult<i64> {
    let days = (end_date - start_date).num_days();
    if days <= 0 {
        return Err(validation_error(
            "endDate",
            "end date must be after start date",
        ));
    }
    Ok(days)
}

/// Coste total en centavos con multiplicación comprobada
pub fn rental_cost_cents(daily_rate_cents: i64, days: i64) -> AppResult<i64> {
    if daily_rate_cents <= 0 {
        return Err(validation_error("dailyRateCents", "daily rate must be positive"));
    }
    daily_rate_cents
        .checked_mul(days)
        .ok_or_else(|| AppError::Internal("rental cost overflows i64".to_string()))
}

/// Presupuesto completo para un coche y un rango de fechas
pub fn quote(
    daily_rate_cents: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> AppResult<CostQuote> {
    let days = rental_days(start_date, end_date)?;
    let total_cost_cents = rental_cost_cents(daily_rate_cents, days)?;
    Ok(CostQuote {
        days,
        daily_rate_cents,
        total_cost_cents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_five_day_rental_at_45_dollars() {
        // dailyRate=$45.00, 2024-02-15 -> 2024-02-20 = 5 días = $225.00
        let quote = quote(4500, date(2024, 2, 15), date(2024, 2, 20)).unwrap();
        assert_eq!(quote.days, 5);
        assert_eq!(quote.total_cost_cents, 22500);
    }

    #[test]
    fn test_single_day_rental() {
        let quote = quote(4500, date(2024, 2, 15), date(2024, 2, 16)).unwrap();
        assert_eq!(quote.days, 1);
        assert_eq!(quote.total_cost_cents, 4500);
    }

    #[test]
    fn test_zero_span_is_rejected() {
        assert!(quote(4500, date(2024, 2, 15), date(2024, 2, 15)).is_err());
    }

    #[test]
    fn test_negative_span_is_rejected() {
        assert!(quote(4500, date(2024, 2, 20), date(2024, 2, 15)).is_err());
    }

    #[test]
    fn test_rejection_is_keyed_to_end_date_field() {
        let err = rental_days(date(2024, 2, 15), date(2024, 2, 15)).unwrap_err();
        match err {
            AppError::Validation(errors) => {
                assert!(errors.field_errors().contains_key("endDate"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_positive_rate_is_rejected() {
        assert!(rental_cost_cents(0, 5).is_err());
        assert!(rental_cost_cents(-100, 5).is_err());
    }

    #[test]
    fn test_cost_overflow_is_an_error_not_a_wraparound() {
        let err = rental_cost_cents(i64::MAX, 2).unwrap_err();
        match err {
            AppError::Internal(_) => {}
            other => panic!("expected internal error, got {:?}", other),
        }
    }

    #[test]
    fn test_cost_spans_month_boundary() {
        let quote = quote(3000, date(2024, 1, 30), date(2024, 2, 2)).unwrap();
        assert_eq!(quote.days, 3);
        assert_eq!(quote.total_cost_cents, 9000);
    }
}
