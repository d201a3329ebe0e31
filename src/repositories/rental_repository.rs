use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::car::CarStatus;
use crate::models::rental::{Rental, RentalStatus};
use crate::utils::errors::{AppError, AppResult};

pub struct RentalRepository {
    pool: PgPool,
}

impl RentalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear la reserva y marcar el coche como RENTED en una transacción
    pub async fn create(
        &self,
        car_id: Uuid,
        customer_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        total_cost_cents: i64,
        notes: Option<String>,
    ) -> AppResult<Rental> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let rental = sqlx::query_as::<_, Rental>(
            r#"
            INSERT INTO rentals (id, car_id, customer_id, start_date, end_date,
                                 total_cost_cents, notes, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'ACTIVE', $8, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(car_id)
        .bind(customer_id)
        .bind(start_date)
        .bind(end_date)
        .bind(total_cost_cents)
        .bind(notes)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE cars SET status = $2, updated_at = $3 WHERE id = $1")
            .bind(car_id)
            .bind(CarStatus::Rented.as_str())
            .bind(now)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(rental)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Rental>> {
        let rental = sqlx::query_as::<_, Rental>("SELECT * FROM rentals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(rental)
    }

    pub async fn find_all(&self) -> AppResult<Vec<Rental>> {
        let rentals = sqlx::query_as::<_, Rental>("SELECT * FROM rentals ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(rentals)
    }

    pub async fn find_by_status(&self, status: &str) -> AppResult<Vec<Rental>> {
        let rentals = sqlx::query_as::<_, Rental>(
            "SELECT * FROM rentals WHERE status = $1 ORDER BY created_at DESC",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(rentals)
    }

    pub async fn find_by_customer(&self, customer_id: Uuid) -> AppResult<Vec<Rental>> {
        let rentals = sqlx::query_as::<_, Rental>(
            "SELECT * FROM rentals WHERE customer_id = $1 ORDER BY created_at DESC",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rentals)
    }

    pub async fn find_by_car(&self, car_id: Uuid) -> AppResult<Vec<Rental>> {
        let rentals = sqlx::query_as::<_, Rental>(
            "SELECT * FROM rentals WHERE car_id = $1 ORDER BY created_at DESC",
        )
        .bind(car_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rentals)
    }

    /// Reservas ACTIVE cuya fecha de fin ya pasó (OVERDUE derivado)
    pub async fn find_overdue(&self, today: NaiveDate) -> AppResult<Vec<Rental>> {
        let rentals = sqlx::query_as::<_, Rental>(
            "SELECT * FROM rentals WHERE status = 'ACTIVE' AND end_date < $1 ORDER BY end_date",
        )
        .bind(today)
        .fetch_all(&self.pool)
        .await?;

        Ok(rentals)
    }

    pub async fn find_by_start_date_between(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<Vec<Rental>> {
        let rentals = sqlx::query_as::<_, Rental>(
            "SELECT * FROM rentals WHERE start_date BETWEEN $1 AND $2 ORDER BY start_date",
        )
        .bind(start_date)
        .bind(end_date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rentals)
    }

    /// Reservas ACTIVE del coche que solapan con el rango pedido
    pub async fn find_conflicting(
        &self,
        car_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<Vec<Rental>> {
        let rentals = sqlx::query_as::<_, Rental>(
            r#"
            SELECT * FROM rentals
            WHERE car_id = $1 AND status = 'ACTIVE'
              AND start_date <= $3 AND end_date >= $2
            "#,
        )
        .bind(car_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rentals)
    }

    pub async fn count_for_car(&self, car_id: Uuid) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rentals WHERE car_id = $1")
            .bind(car_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Actualización de fechas/notas de una reserva ACTIVE con coste recalculado
    pub async fn update_dates(
        &self,
        id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        total_cost_cents: i64,
        notes: Option<String>,
    ) -> AppResult<Rental> {
        let rental = sqlx::query_as::<_, Rental>(
            r#"
            UPDATE rentals
            SET start_date = $2, end_date = $3, total_cost_cents = $4, notes = $5, updated_at = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(start_date)
        .bind(end_date)
        .bind(total_cost_cents)
        .bind(notes)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Rental not found".to_string()))?;

        Ok(rental)
    }

    /// Completar la reserva y liberar el coche en una transacción
    pub async fn complete(&self, id: Uuid, actual_return_date: NaiveDate) -> AppResult<Rental> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let rental = sqlx::query_as::<_, Rental>(
            r#"
            UPDATE rentals
            SET status = $2, actual_return_date = $3, updated_at = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(RentalStatus::Completed.as_str())
        .bind(actual_return_date)
        .bind(now)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Rental not found".to_string()))?;

        sqlx::query("UPDATE cars SET status = $2, updated_at = $3 WHERE id = $1")
            .bind(rental.car_id)
            .bind(CarStatus::Available.as_str())
            .bind(now)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(rental)
    }

    /// Cancelar la reserva y liberar el coche en una transacción
    pub async fn cancel(&self, id: Uuid) -> AppResult<Rental> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let rental = sqlx::query_as::<_, Rental>(
            r#"
            UPDATE rentals
            SET status = $2, updated_at = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(RentalStatus::Cancelled.as_str())
        .bind(now)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Rental not found".to_string()))?;

        sqlx::query("UPDATE cars SET status = $2, updated_at = $3 WHERE id = $1")
            .bind(rental.car_id)
            .bind(CarStatus::Available.as_str())
            .bind(now)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(rental)
    }

    /// Eliminar la reserva; si estaba ACTIVE el coche vuelve a AVAILABLE
    pub async fn delete(&self, id: Uuid, free_car: Option<Uuid>) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        if let Some(car_id) = free_car {
            sqlx::query("UPDATE cars SET status = $2, updated_at = $3 WHERE id = $1")
                .bind(car_id)
                .bind(CarStatus::Available.as_str())
                .bind(Utc::now())
                .execute(&mut *tx)
                .await?;
        }

        let result = sqlx::query("DELETE FROM rentals WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Rental not found".to_string()));
        }

        tx.commit().await?;
        Ok(())
    }

    pub async fn count_by_status(&self, status: &str) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rentals WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn count_overdue(&self, today: NaiveDate) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM rentals WHERE status = 'ACTIVE' AND end_date < $1",
        )
        .bind(today)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Ingresos totales de reservas COMPLETED, en centavos
    pub async fn total_revenue_cents(&self) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(total_cost_cents), 0)::BIGINT FROM rentals WHERE status = 'COMPLETED'",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    /// Ingresos de reservas COMPLETED agrupados por mes de devolución
    pub async fn monthly_earnings(&self) -> AppResult<Vec<(String, i64, i64)>> {
        let rows: Vec<(String, i64, i64)> = sqlx::query_as(
            r#"
            SELECT TO_CHAR(COALESCE(actual_return_date, end_date), 'YYYY-MM') AS month,
                   COUNT(*)::BIGINT,
                   COALESCE(SUM(total_cost_cents), 0)::BIGINT
            FROM rentals
            WHERE status = 'COMPLETED'
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
