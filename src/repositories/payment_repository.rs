use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::payment::{Payment, PaymentMethod, PaymentStatus};
use crate::utils::errors::{AppError, AppResult};

pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ----- pagos -----

    pub async fn create_payment(
        &self,
        rental_id: Uuid,
        amount_cents: i64,
        method: String,
        card_last4: Option<String>,
        reference: String,
    ) -> AppResult<Payment> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (id, rental_id, amount_cents, method, card_last4, status, reference, paid_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(rental_id)
        .bind(amount_cents)
        .bind(method)
        .bind(card_last4)
        .bind(PaymentStatus::Completed.as_str())
        .bind(reference)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(payment)
    }

    pub async fn find_payment_by_id(&self, id: Uuid) -> AppResult<Option<Payment>> {
        let payment = sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(payment)
    }

    pub async fn find_all_payments(&self, status: Option<&str>) -> AppResult<Vec<Payment>> {
        let payments = sqlx::query_as::<_, Payment>(
            "SELECT * FROM payments WHERE ($1::text IS NULL OR status = $1) ORDER BY paid_at DESC",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }

    pub async fn payment_reference_exists(&self, reference: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM payments WHERE reference = $1)")
                .bind(reference)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    // ----- métodos de pago -----

    pub async fn create_method(
        &self,
        method_type: String,
        provider: String,
        last4: String,
        expiry_month: i32,
        expiry_year: i32,
    ) -> AppResult<PaymentMethod> {
        let method = sqlx::query_as::<_, PaymentMethod>(
            r#"
            INSERT INTO payment_methods (id, method_type, provider, last4, expiry_month,
                                         expiry_year, is_default, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, false, 'ACTIVE', $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(method_type)
        .bind(provider)
        .bind(last4)
        .bind(expiry_month)
        .bind(expiry_year)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(method)
    }

    pub async fn find_method_by_id(&self, id: Uuid) -> AppResult<Option<PaymentMethod>> {
        let method =
            sqlx::query_as::<_, PaymentMethod>("SELECT * FROM payment_methods WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(method)
    }

    pub async fn find_all_methods(&self) -> AppResult<Vec<PaymentMethod>> {
        let methods = sqlx::query_as::<_, PaymentMethod>(
            "SELECT * FROM payment_methods ORDER BY is_default DESC, created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(methods)
    }

    pub async fn update_method(
        &self,
        id: Uuid,
        provider: Option<String>,
        expiry_month: Option<i32>,
        expiry_year: Option<i32>,
        status: Option<String>,
    ) -> AppResult<PaymentMethod> {
        let current = self
            .find_method_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment method not found".to_string()))?;

        let method = sqlx::query_as::<_, PaymentMethod>(
            r#"
            UPDATE payment_methods
            SET provider = $2, expiry_month = $3, expiry_year = $4, status = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(provider.unwrap_or(current.provider))
        .bind(expiry_month.unwrap_or(current.expiry_month))
        .bind(expiry_year.unwrap_or(current.expiry_year))
        .bind(status.unwrap_or(current.status))
        .fetch_one(&self.pool)
        .await?;

        Ok(method)
    }

    /// Marcar como único método por defecto, en una transacción
    pub async fn set_default_method(&self, id: Uuid) -> AppResult<PaymentMethod> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE payment_methods SET is_default = false WHERE is_default = true")
            .execute(&mut *tx)
            .await?;

        let method = sqlx::query_as::<_, PaymentMethod>(
            "UPDATE payment_methods SET is_default = true WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Payment method not found".to_string()))?;

        tx.commit().await?;
        Ok(method)
    }

    pub async fn delete_method(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM payment_methods WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Payment method not found".to_string()));
        }

        Ok(())
    }
}
