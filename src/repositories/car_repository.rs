use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::car::Car;
use crate::utils::errors::{AppError, AppResult};

pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        make: String,
        model: String,
        year: i32,
        license_plate: String,
        daily_rate_cents: i64,
        fuel_type: Option<String>,
        transmission_type: Option<String>,
        seating_capacity: Option<i32>,
    ) -> AppResult<Car> {
        let now = Utc::now();
        let car = sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (id, make, model, year, license_plate, daily_rate_cents, status,
                              fuel_type, transmission_type, seating_capacity, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, 'AVAILABLE', $7, $8, $9, $10, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(make)
        .bind(model)
        .bind(year)
        .bind(license_plate)
        .bind(daily_rate_cents)
        .bind(fuel_type)
        .bind(transmission_type)
        .bind(seating_capacity)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(car)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Car>> {
        let car = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(car)
    }

    pub async fn find_all(&self) -> AppResult<Vec<Car>> {
        let cars = sqlx::query_as::<_, Car>("SELECT * FROM cars ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(cars)
    }

    pub async fn find_by_status(&self, status: &str) -> AppResult<Vec<Car>> {
        let cars = sqlx::query_as::<_, Car>(
            "SELECT * FROM cars WHERE status = $1 ORDER BY created_at DESC",
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(cars)
    }

    pub async fn find_by_make_and_model(&self, make: &str, model: &str) -> AppResult<Vec<Car>> {
        let cars = sqlx::query_as::<_, Car>(
            "SELECT * FROM cars WHERE LOWER(make) = LOWER($1) AND LOWER(model) = LOWER($2) ORDER BY created_at DESC",
        )
        .bind(make)
        .bind(model)
        .fetch_all(&self.pool)
        .await?;

        Ok(cars)
    }

    pub async fn search(&self, keyword: &str) -> AppResult<Vec<Car>> {
        let pattern = format!("%{}%", keyword);
        let cars = sqlx::query_as::<_, Car>(
            "SELECT * FROM cars WHERE make ILIKE $1 OR model ILIKE $1 ORDER BY created_at DESC",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(cars)
    }

    pub async fn find_by_rate_range(
        &self,
        min_rate_cents: i64,
        max_rate_cents: i64,
    ) -> AppResult<Vec<Car>> {
        let cars = sqlx::query_as::<_, Car>(
            "SELECT * FROM cars WHERE daily_rate_cents BETWEEN $1 AND $2 ORDER BY daily_rate_cents",
        )
        .bind(min_rate_cents)
        .bind(max_rate_cents)
        .fetch_all(&self.pool)
        .await?;

        Ok(cars)
    }

    pub async fn license_plate_exists(
        &self,
        license_plate: &str,
        exclude_id: Option<Uuid>,
    ) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM cars WHERE license_plate = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(license_plate)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        make: Option<String>,
        model: Option<String>,
        year: Option<i32>,
        license_plate: Option<String>,
        daily_rate_cents: Option<i64>,
        fuel_type: Option<String>,
        transmission_type: Option<String>,
        seating_capacity: Option<i32>,
    ) -> AppResult<Car> {
        // Obtener coche actual para aplicar la actualización parcial
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

        let car = sqlx::query_as::<_, Car>(
            r#"
            UPDATE cars
            SET make = $2, model = $3, year = $4, license_plate = $5, daily_rate_cents = $6,
                fuel_type = $7, transmission_type = $8, seating_capacity = $9, updated_at = $10
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(make.unwrap_or(current.make))
        .bind(model.unwrap_or(current.model))
        .bind(year.unwrap_or(current.year))
        .bind(license_plate.unwrap_or(current.license_plate))
        .bind(daily_rate_cents.unwrap_or(current.daily_rate_cents))
        .bind(fuel_type.or(current.fuel_type))
        .bind(transmission_type.or(current.transmission_type))
        .bind(seating_capacity.or(current.seating_capacity))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(car)
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> AppResult<Car> {
        let car = sqlx::query_as::<_, Car>(
            "UPDATE cars SET status = $2, updated_at = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

        Ok(car)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Car not found".to_string()));
        }

        Ok(())
    }

    pub async fn count_all(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cars")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn count_by_status(&self, status: &str) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cars WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
