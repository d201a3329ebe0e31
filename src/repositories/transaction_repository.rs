use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::payment::PaymentStatus;
use crate::models::transaction::Transaction;
use crate::utils::errors::AppResult;

pub struct TransactionRepository {
    pool: PgPool,
}

impl TransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        entry_type: &str,
        category: String,
        description: String,
        amount_cents: i64,
        reference: String,
        occurred_at: DateTime<Utc>,
    ) -> AppResult<Transaction> {
        let tx = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (id, entry_type, category, description, amount_cents,
                                      status, reference, occurred_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(entry_type)
        .bind(category)
        .bind(description)
        .bind(amount_cents)
        .bind(PaymentStatus::Completed.as_str())
        .bind(reference)
        .bind(occurred_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(tx)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Transaction>> {
        let tx = sqlx::query_as::<_, Transaction>("SELECT * FROM transactions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(tx)
    }

    /// Listado con filtros opcionales por tipo y rango de fechas
    pub async fn find_filtered(
        &self,
        entry_type: Option<&str>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> AppResult<Vec<Transaction>> {
        let txs = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT * FROM transactions
            WHERE ($1::text IS NULL OR entry_type = $1)
              AND ($2::date IS NULL OR occurred_at::date >= $2)
              AND ($3::date IS NULL OR occurred_at::date <= $3)
            ORDER BY occurred_at DESC
            "#,
        )
        .bind(entry_type)
        .bind(start_date)
        .bind(end_date)
        .fetch_all(&self.pool)
        .await?;

        Ok(txs)
    }

    pub async fn reference_exists(&self, reference: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM transactions WHERE reference = $1)")
                .bind(reference)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    /// Totales de ingresos, gastos y neto en centavos
    pub async fn summary(&self) -> AppResult<(i64, i64, i64, i64)> {
        let row: (i64, i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(amount_cents) FILTER (WHERE entry_type = 'INCOME'), 0)::BIGINT,
                   COALESCE(SUM(amount_cents) FILTER (WHERE entry_type = 'EXPENSE'), 0)::BIGINT,
                   COALESCE(SUM(amount_cents), 0)::BIGINT,
                   COUNT(*)::BIGINT
            FROM transactions
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}
