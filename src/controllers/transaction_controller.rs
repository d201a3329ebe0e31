use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::transaction_dto::{
    CreateTransactionRequest, TransactionResponse, TransactionSummaryResponse,
};
use crate::models::transaction::EntryType;
use crate::repositories::transaction_repository::TransactionRepository;
use crate::utils::errors::{conflict_error, AppError, AppResult};

pub struct TransactionController {
    repository: TransactionRepository,
}

impl TransactionController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TransactionRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateTransactionRequest,
    ) -> AppResult<ApiResponse<TransactionResponse>> {
        request.validate()?;

        let entry_type = EntryType::parse(&request.entry_type).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Invalid type '{}', allowed values: INCOME, EXPENSE",
                request.entry_type
            ))
        })?;

        // El signo del importe debe ser coherente con el tipo de asiento
        match entry_type {
            EntryType::Income if request.amount_cents <= 0 => {
                return Err(AppError::BadRequest(
                    "INCOME entries require a positive amount".to_string(),
                ));
            }
            EntryType::Expense if request.amount_cents >= 0 => {
                return Err(AppError::BadRequest(
                    "EXPENSE entries require a negative amount".to_string(),
                ));
            }
            _ => {}
        }

        if self.repository.reference_exists(&request.reference).await? {
            return Err(conflict_error("Transaction", "reference", &request.reference));
        }

        let tx = self
            .repository
            .create(
                entry_type.as_str(),
                request.category,
                request.description,
                request.amount_cents,
                request.reference,
                request.occurred_at.unwrap_or_else(Utc::now),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            tx.into(),
            "Asiento registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<TransactionResponse> {
        let tx = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Transaction not found".to_string()))?;

        Ok(tx.into())
    }

    pub async fn list(
        &self,
        entry_type: Option<&str>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> AppResult<Vec<TransactionResponse>> {
        let entry_type = match entry_type {
            Some(value) => Some(
                EntryType::parse(value)
                    .ok_or_else(|| {
                        AppError::BadRequest(format!(
                            "Invalid type '{}', allowed values: INCOME, EXPENSE",
                            value
                        ))
                    })?
                    .as_str(),
            ),
            None => None,
        };

        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                return Err(AppError::BadRequest(
                    "endDate must not be before startDate".to_string(),
                ));
            }
        }

        let txs = self
            .repository
            .find_filtered(entry_type, start_date, end_date)
            .await?;
        Ok(txs.into_iter().map(TransactionResponse::from).collect())
    }

    pub async fn summary(&self) -> AppResult<TransactionSummaryResponse> {
        let (income_cents, expense_cents, net_cents, entries) = self.repository.summary().await?;
        Ok(TransactionSummaryResponse {
            income_cents,
            expense_cents,
            net_cents,
            entries,
        })
    }
}
