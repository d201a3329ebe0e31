use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::payment::{Payment, PaymentMethod, PaymentMethodStatus, PaymentStatus};

// Request para registrar un pago
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub rental_id: Uuid,

    #[validate(range(min = 1))]
    pub amount_cents: i64,

    #[validate(length(min = 1, max = 50))]
    pub method: String,

    #[validate(length(min = 4, max = 4))]
    pub card_last4: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub reference: String,
}

// Response de pago
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: Uuid,
    pub rental_id: Uuid,
    pub amount_cents: i64,
    pub method: String,
    pub card_last4: Option<String>,
    pub status: PaymentStatus,
    pub reference: String,
    pub paid_at: DateTime<Utc>,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        let status = PaymentStatus::parse(&payment.status).unwrap_or(PaymentStatus::Failed);
        Self {
            id: payment.id,
            rental_id: payment.rental_id,
            amount_cents: payment.amount_cents,
            method: payment.method,
            card_last4: payment.card_last4,
            status,
            reference: payment.reference,
            paid_at: payment.paid_at,
        }
    }
}

// Query opcional de filtrado de pagos
#[derive(Debug, Deserialize)]
pub struct PaymentListQuery {
    pub status: Option<String>,
}

// Request para registrar un método de pago
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentMethodRequest {
    #[validate(length(min = 1, max = 50))]
    pub method_type: String,

    #[validate(length(min = 1, max = 50))]
    pub provider: String,

    #[validate(length(min = 4, max = 4))]
    pub last4: String,

    #[validate(range(min = 1, max = 12))]
    pub expiry_month: i32,

    #[validate(range(min = 2020, max = 2050))]
    pub expiry_year: i32,
}

// Request para actualizar un método de pago
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentMethodRequest {
    #[validate(length(min = 1, max = 50))]
    pub provider: Option<String>,

    #[validate(range(min = 1, max = 12))]
    pub expiry_month: Option<i32>,

    #[validate(range(min = 2020, max = 2050))]
    pub expiry_year: Option<i32>,

    pub status: Option<String>,
}

// Response de método de pago
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodResponse {
    pub id: Uuid,
    pub method_type: String,
    pub provider: String,
    pub last4: String,
    pub expiry_month: i32,
    pub expiry_year: i32,
    pub is_default: bool,
    pub status: PaymentMethodStatus,
    pub created_at: DateTime<Utc>,
}

impl From<PaymentMethod> for PaymentMethodResponse {
    fn from(method: PaymentMethod) -> Self {
        let status =
            PaymentMethodStatus::parse(&method.status).unwrap_or(PaymentMethodStatus::Disabled);
        Self {
            id: method.id,
            method_type: method.method_type,
            provider: method.provider,
            last4: method.last4,
            expiry_month: method.expiry_month,
            expiry_year: method.expiry_year,
            is_default: method.is_default,
            status,
            created_at: method.created_at,
        }
    }
}
