//! Servicio de tasas de cambio
//!
//! Mantiene la tabla de tasas relativa a USD que alimenta la pantalla de
//! cambio de divisas y convierte importes entre divisas. La aritmética usa
//! Decimal de punta a punta; los importes entran y salen en unidades
//! menores (centavos).

use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::exchange::ExchangeRate;
use crate::utils::errors::{validation_error, AppError, AppResult};

/// Tabla de tasas indexada por código de divisa
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: BTreeMap<String, ExchangeRate>,
}

impl RateTable {
    /// Tabla con el feed simulado del dashboard (tasas por 1 USD)
    pub fn bootstrap() -> Self {
        let mut rates = BTreeMap::new();
        let entries = [
            ExchangeRate::new("USD", Decimal::new(10000, 4), Decimal::ZERO, Decimal::ZERO, Decimal::new(10000, 4), Decimal::new(10000, 4)),
            ExchangeRate::new("EUR", Decimal::new(8456, 4), Decimal::new(-23, 4), Decimal::new(-27, 2), Decimal::new(8489, 4), Decimal::new(8432, 4)),
            ExchangeRate::new("GBP", Decimal::new(7234, 4), Decimal::new(45, 4), Decimal::new(63, 2), Decimal::new(7256, 4), Decimal::new(7198, 4)),
            ExchangeRate::new("JPY", Decimal::new(14985, 2), Decimal::new(123, 2), Decimal::new(83, 2), Decimal::new(15012, 2), Decimal::new(14867, 2)),
            ExchangeRate::new("CAD", Decimal::new(13567, 4), Decimal::new(-89, 4), Decimal::new(-65, 2), Decimal::new(13598, 4), Decimal::new(13534, 4)),
            ExchangeRate::new("AUD", Decimal::new(15234, 4), Decimal::new(156, 4), Decimal::new(103, 2), Decimal::new(15267, 4), Decimal::new(15189, 4)),
            ExchangeRate::new("CHF", Decimal::new(8923, 4), Decimal::new(34, 4), Decimal::new(38, 2), Decimal::new(8945, 4), Decimal::new(8901, 4)),
            ExchangeRate::new("CNY", Decimal::new(72456, 4), Decimal::new(-234, 4), Decimal::new(-32, 2), Decimal::new(72567, 4), Decimal::new(72389, 4)),
            ExchangeRate::new("INR", Decimal::new(832345, 4), Decimal::new(1234, 4), Decimal::new(15, 2), Decimal::new(834567, 4), Decimal::new(831234, 4)),
            ExchangeRate::new("BRL", Decimal::new(51234, 4), Decimal::new(-567, 4), Decimal::new(-109, 2), Decimal::new(51567, 4), Decimal::new(50987, 4)),
            ExchangeRate::new("RUB", Decimal::new(923456, 4), Decimal::new(23456, 4), Decimal::new(261, 2), Decimal::new(931234, 4), Decimal::new(902345, 4)),
            ExchangeRate::new("KRW", Decimal::new(134256, 2), Decimal::new(-567, 2), Decimal::new(-42, 2), Decimal::new(134823, 2), Decimal::new(133945, 2)),
        ];
        for entry in entries {
            rates.insert(entry.code.clone(), entry);
        }
        Self { rates }
    }

    pub fn get(&self, code: &str) -> Option<&ExchangeRate> {
        self.rates.get(&code.to_uppercase())
    }

    pub fn all(&self) -> Vec<ExchangeRate> {
        self.rates.values().cloned().collect()
    }

    /// Convertir un importe en unidades menores entre dos divisas.
    /// Redondeo a la unidad menor, mitades alejándose de cero.
    pub fn convert_cents(&self, amount_cents: i64, from: &str, to: &str) -> AppResult<i64> {
        if amount_cents < 0 {
            return Err(validation_error("amount", "amount must be non-negative"));
        }

        let from_rate = self
            .get(from)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown currency '{}'", from)))?
            .rate;
        let to_rate = self
            .get(to)
            .ok_or_else(|| AppError::BadRequest(format!("Unknown currency '{}'", to)))?
            .rate;

        let amount = Decimal::from(amount_cents);
        let converted = (amount * to_rate / from_rate)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        converted
            .to_i64()
            .ok_or_else(|| AppError::Internal("converted amount overflows i64".to_string()))
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::bootstrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_conversion() {
        let table = RateTable::bootstrap();
        assert_eq!(table.convert_cents(12345, "USD", "USD").unwrap(), 12345);
    }

    #[test]
    fn test_usd_to_eur() {
        let table = RateTable::bootstrap();
        // 1000 * 0.8456 = 845.6 -> 846
        assert_eq!(table.convert_cents(1000, "USD", "EUR").unwrap(), 846);
    }

    #[test]
    fn test_eur_to_usd() {
        let table = RateTable::bootstrap();
        // 1000 / 0.8456 = 1182.59... -> 1183
        assert_eq!(table.convert_cents(1000, "EUR", "USD").unwrap(), 1183);
    }

    #[test]
    fn test_lowercase_codes_are_accepted() {
        let table = RateTable::bootstrap();
        assert_eq!(
            table.convert_cents(1000, "usd", "eur").unwrap(),
            table.convert_cents(1000, "USD", "EUR").unwrap()
        );
    }

    #[test]
    fn test_unknown_currency_is_rejected() {
        let table = RateTable::bootstrap();
        assert!(table.convert_cents(1000, "USD", "XYZ").is_err());
        assert!(table.convert_cents(1000, "XYZ", "USD").is_err());
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let table = RateTable::bootstrap();
        assert!(table.convert_cents(-1, "USD", "EUR").is_err());
    }

    #[test]
    fn test_zero_amount_converts_to_zero() {
        let table = RateTable::bootstrap();
        assert_eq!(table.convert_cents(0, "USD", "JPY").unwrap(), 0);
    }

    #[test]
    fn test_table_contains_the_full_feed() {
        let table = RateTable::bootstrap();
        assert_eq!(table.all().len(), 12);
        assert!(table.get("KRW").is_some());
    }
}
