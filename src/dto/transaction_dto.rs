use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::transaction::{EntryType, Transaction};
use crate::models::payment::PaymentStatus;

// Request para registrar un asiento
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    #[serde(rename = "type")]
    pub entry_type: String,

    #[validate(length(min = 1, max = 50))]
    pub category: String,

    #[validate(length(min = 1, max = 200))]
    pub description: String,

    /// Centavos con signo: los gastos llegan negativos
    pub amount_cents: i64,

    #[validate(length(min = 1, max = 50))]
    pub reference: String,

    pub occurred_at: Option<DateTime<Utc>>,
}

// Response de asiento
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub category: String,
    pub description: String,
    pub amount_cents: i64,
    pub status: PaymentStatus,
    pub reference: String,
    pub occurred_at: DateTime<Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(tx: Transaction) -> Self {
        let entry_type = tx.entry_type();
        let status = PaymentStatus::parse(&tx.status).unwrap_or(PaymentStatus::Failed);
        Self {
            id: tx.id,
            entry_type,
            category: tx.category,
            description: tx.description,
            amount_cents: tx.amount_cents,
            status,
            reference: tx.reference,
            occurred_at: tx.occurred_at,
        }
    }
}

// Query de filtrado del listado
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionListQuery {
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
}

// Resumen de ingresos y gastos
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummaryResponse {
    pub income_cents: i64,
    pub expense_cents: i64,
    pub net_cents: i64,
    pub entries: i64,
}
