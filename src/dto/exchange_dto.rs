use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::exchange::ExchangeRate;

// Query de conversión; el importe viaja en unidades menores
#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    pub amount: i64,
    pub from: String,
    pub to: String,
}

// Response de conversión
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResponse {
    pub amount_cents: i64,
    pub from: String,
    pub to: String,
    pub converted_cents: i64,
}

// Response del listado de tasas
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateResponse {
    pub code: String,
    pub rate: Decimal,
    pub change: Decimal,
    pub change_percent: Decimal,
    pub high: Decimal,
    pub low: Decimal,
}

impl From<ExchangeRate> for RateResponse {
    fn from(rate: ExchangeRate) -> Self {
        Self {
            code: rate.code,
            rate: rate.rate,
            change: rate.change,
            change_percent: rate.change_percent,
            high: rate.high,
            low: rate.low,
        }
    }
}
