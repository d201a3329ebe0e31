use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::branch::Branch;
use crate::utils::errors::{AppError, AppResult};

pub struct BranchRepository {
    pool: PgPool,
}

impl BranchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        code: String,
        address: String,
        city: String,
        state: String,
        zip_code: String,
        phone: String,
        email: String,
        manager_name: String,
        opening_hours: Option<String>,
        established_date: Option<NaiveDate>,
    ) -> AppResult<Branch> {
        let branch = sqlx::query_as::<_, Branch>(
            r#"
            INSERT INTO branches (id, name, code, address, city, state, zip_code, phone, email,
                                  manager_name, opening_hours, status, established_date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, 'ACTIVE', $12, $13)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(code)
        .bind(address)
        .bind(city)
        .bind(state)
        .bind(zip_code)
        .bind(phone)
        .bind(email)
        .bind(manager_name)
        .bind(opening_hours)
        .bind(established_date)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(branch)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Branch>> {
        let branch = sqlx::query_as::<_, Branch>("SELECT * FROM branches WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(branch)
    }

    pub async fn find_all(&self) -> AppResult<Vec<Branch>> {
        let branches = sqlx::query_as::<_, Branch>("SELECT * FROM branches ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(branches)
    }

    pub async fn code_exists(&self, code: &str, exclude_id: Option<Uuid>) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM branches WHERE code = $1 AND ($2::uuid IS NULL OR id <> $2))",
        )
        .bind(code)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn search(&self, keyword: &str) -> AppResult<Vec<Branch>> {
        let pattern = format!("%{}%", keyword);
        let branches = sqlx::query_as::<_, Branch>(
            "SELECT * FROM branches WHERE name ILIKE $1 OR city ILIKE $1 OR code ILIKE $1 ORDER BY name",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(branches)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        address: Option<String>,
        city: Option<String>,
        state: Option<String>,
        zip_code: Option<String>,
        phone: Option<String>,
        email: Option<String>,
        manager_name: Option<String>,
        opening_hours: Option<String>,
        status: Option<String>,
        established_date: Option<NaiveDate>,
    ) -> AppResult<Branch> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Branch not found".to_string()))?;

        let branch = sqlx::query_as::<_, Branch>(
            r#"
            UPDATE branches
            SET name = $2, address = $3, city = $4, state = $5, zip_code = $6, phone = $7,
                email = $8, manager_name = $9, opening_hours = $10, status = $11,
                established_date = $12
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(address.unwrap_or(current.address))
        .bind(city.unwrap_or(current.city))
        .bind(state.unwrap_or(current.state))
        .bind(zip_code.unwrap_or(current.zip_code))
        .bind(phone.unwrap_or(current.phone))
        .bind(email.unwrap_or(current.email))
        .bind(manager_name.unwrap_or(current.manager_name))
        .bind(opening_hours.or(current.opening_hours))
        .bind(status.unwrap_or(current.status))
        .bind(established_date.or(current.established_date))
        .fetch_one(&self.pool)
        .await?;

        Ok(branch)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM branches WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Branch not found".to_string()));
        }

        Ok(())
    }
}
