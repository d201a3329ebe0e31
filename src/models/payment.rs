//! Modelos de pagos
//!
//! Pagos de reservas y métodos de pago registrados.
//! Mapean a las tablas payments y payment_methods.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de un pago
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [
        PaymentStatus::Completed,
        PaymentStatus::Pending,
        PaymentStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Completed => "COMPLETED",
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Failed => "FAILED",
        }
    }

    pub fn parse(value: &str) -> Option<PaymentStatus> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

/// Estado de un método de pago registrado
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethodStatus {
    Active,
    Expired,
    Disabled,
}

impl PaymentMethodStatus {
    pub const ALL: [PaymentMethodStatus; 3] = [
        PaymentMethodStatus::Active,
        PaymentMethodStatus::Expired,
        PaymentMethodStatus::Disabled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethodStatus::Active => "ACTIVE",
            PaymentMethodStatus::Expired => "EXPIRED",
            PaymentMethodStatus::Disabled => "DISABLED",
        }
    }

    pub fn parse(value: &str) -> Option<PaymentMethodStatus> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

/// Pago asociado a una reserva - tabla payments
#[derive(Debug, Clone, FromRow)]
pub struct Payment {
    pub id: Uuid,
    pub rental_id: Uuid,
    pub amount_cents: i64,
    pub method: String,
    pub card_last4: Option<String>,
    pub status: String,
    pub reference: String,
    pub paid_at: DateTime<Utc>,
}

/// Método de pago registrado - tabla payment_methods
#[derive(Debug, Clone, FromRow)]
pub struct PaymentMethod {
    pub id: Uuid,
    pub method_type: String,
    pub provider: String,
    pub last4: String,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub is_default: bool,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_status_round_trip() {
        for status in PaymentStatus::ALL {
            assert_eq!(PaymentStatus::parse(status.as_str()), Some(status));
        }
    }
}
