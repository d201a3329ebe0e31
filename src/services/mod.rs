//! Servicios de negocio
//!
//! Lógica de negocio que no pertenece ni a los controllers ni a los
//! repositories: cálculo de costes de alquiler y conversión de divisas.

pub mod exchange_rates;
pub mod pricing;
