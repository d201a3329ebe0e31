use std::sync::Arc;

use crate::dto::exchange_dto::{ConversionResponse, RateResponse};
use crate::services::exchange_rates::RateTable;
use crate::utils::errors::AppResult;

pub struct ExchangeController {
    rates: Arc<RateTable>,
}

impl ExchangeController {
    pub fn new(rates: Arc<RateTable>) -> Self {
        Self { rates }
    }

    pub fn list_rates(&self) -> Vec<RateResponse> {
        self.rates.all().into_iter().map(RateResponse::from).collect()
    }

    pub fn convert(&self, amount_cents: i64, from: &str, to: &str) -> AppResult<ConversionResponse> {
        let converted_cents = self.rates.convert_cents(amount_cents, from, to)?;
        Ok(ConversionResponse {
            amount_cents,
            from: from.to_uppercase(),
            to: to.to_uppercase(),
            converted_cents,
        })
    }
}
