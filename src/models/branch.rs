//! Modelo de Branch
//!
//! Mapea exactamente a la tabla branches.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de la sucursal - se persiste como TEXT
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BranchStatus {
    Active,
    Inactive,
    Maintenance,
}

impl BranchStatus {
    pub const ALL: [BranchStatus; 3] = [
        BranchStatus::Active,
        BranchStatus::Inactive,
        BranchStatus::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BranchStatus::Active => "ACTIVE",
            BranchStatus::Inactive => "INACTIVE",
            BranchStatus::Maintenance => "MAINTENANCE",
        }
    }

    pub fn parse(value: &str) -> Option<BranchStatus> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Branch {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub phone: String,
    pub email: String,
    pub manager_name: String,
    pub opening_hours: Option<String>,
    pub status: String,
    pub established_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in BranchStatus::ALL {
            assert_eq!(BranchStatus::parse(status.as_str()), Some(status));
        }
    }
}
