use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::customer::Customer;
use crate::utils::errors::{AppError, AppResult};

pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        first_name: String,
        last_name: String,
        email: String,
        phone_number: String,
        driver_license: String,
        address: Option<String>,
    ) -> AppResult<Customer> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (id, first_name, last_name, email, phone_number, driver_license, address, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(phone_number)
        .bind(driver_license)
        .bind(address)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(customer)
    }

    pub async fn find_all(&self) -> AppResult<Vec<Customer>> {
        let customers =
            sqlx::query_as::<_, Customer>("SELECT * FROM customers ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?;

        Ok(customers)
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            "SELECT * FROM customers WHERE LOWER(email) = LOWER($1)",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    pub async fn find_by_driver_license(&self, driver_license: &str) -> AppResult<Option<Customer>> {
        let customer =
            sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE driver_license = $1")
                .bind(driver_license)
                .fetch_optional(&self.pool)
                .await?;

        Ok(customer)
    }

    pub async fn search(&self, keyword: &str) -> AppResult<Vec<Customer>> {
        let pattern = format!("%{}%", keyword);
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT * FROM customers
            WHERE first_name ILIKE $1 OR last_name ILIKE $1 OR email ILIKE $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    pub async fn update(
        &self,
        id: Uuid,
        first_name: Option<String>,
        last_name: Option<String>,
        email: Option<String>,
        phone_number: Option<String>,
        driver_license: Option<String>,
        address: Option<String>,
    ) -> AppResult<Customer> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        let customer = sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET first_name = $2, last_name = $3, email = $4, phone_number = $5,
                driver_license = $6, address = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(first_name.unwrap_or(current.first_name))
        .bind(last_name.unwrap_or(current.last_name))
        .bind(email.unwrap_or(current.email))
        .bind(phone_number.unwrap_or(current.phone_number))
        .bind(driver_license.unwrap_or(current.driver_license))
        .bind(address.or(current.address))
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Customer not found".to_string()));
        }

        Ok(())
    }

    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM customers WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn count_all(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
