//! Modelo de tasas de cambio
//!
//! Tabla de tasas relativa a USD usada por la pantalla de cambio de
//! divisas. No se persiste: vive en memoria dentro del estado compartido.

use rust_decimal::Decimal;
use serde::Serialize;

/// Tasa de una divisa relativa a USD, con los datos del día
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExchangeRate {
    pub code: String,
    pub rate: Decimal,
    pub change: Decimal,
    pub change_percent: Decimal,
    pub high: Decimal,
    pub low: Decimal,
}

impl ExchangeRate {
    pub fn new(code: &str, rate: Decimal, change: Decimal, change_percent: Decimal, high: Decimal, low: Decimal) -> Self {
        Self {
            code: code.to_string(),
            rate,
            change,
            change_percent,
            high,
            low,
        }
    }
}
