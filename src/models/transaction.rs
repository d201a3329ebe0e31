//! Modelo de Transaction
//!
//! Asientos del libro de ingresos y gastos. Mapea a la tabla transactions.
//! Los importes se guardan en centavos con signo: gastos negativos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipo de asiento
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryType {
    Income,
    Expense,
}

impl EntryType {
    pub const ALL: [EntryType; 2] = [EntryType::Income, EntryType::Expense];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Income => "INCOME",
            EntryType::Expense => "EXPENSE",
        }
    }

    pub fn parse(value: &str) -> Option<EntryType> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Transaction {
    pub id: Uuid,
    pub entry_type: String,
    pub category: String,
    pub description: String,
    pub amount_cents: i64,
    pub status: String,
    pub reference: String,
    pub occurred_at: DateTime<Utc>,
}

impl Transaction {
    pub fn entry_type(&self) -> EntryType {
        EntryType::parse(&self.entry_type).unwrap_or(EntryType::Expense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_type_round_trip() {
        for entry in EntryType::ALL {
            assert_eq!(EntryType::parse(entry.as_str()), Some(entry));
        }
    }
}
