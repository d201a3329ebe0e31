use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::customer_dto::{CreateCustomerRequest, CustomerResponse, UpdateCustomerRequest};
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::rental_repository::RentalRepository;
use crate::utils::errors::{conflict_error, AppError, AppResult};

pub struct CustomerController {
    repository: CustomerRepository,
    rental_repository: RentalRepository,
}

impl CustomerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CustomerRepository::new(pool.clone()),
            rental_repository: RentalRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateCustomerRequest,
    ) -> AppResult<ApiResponse<CustomerResponse>> {
        request.validate()?;

        // Email y licencia de conducir deben ser únicos
        if self.repository.find_by_email(&request.email).await?.is_some() {
            return Err(conflict_error("Customer", "email", &request.email));
        }
        if self
            .repository
            .find_by_driver_license(&request.driver_license)
            .await?
            .is_some()
        {
            return Err(conflict_error(
                "Customer",
                "driver license",
                &request.driver_license,
            ));
        }

        let customer = self
            .repository
            .create(
                request.first_name,
                request.last_name,
                request.email,
                request.phone_number,
                request.driver_license,
                request.address,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            customer.into(),
            "Cliente creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<CustomerResponse> {
        let customer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        Ok(customer.into())
    }

    pub async fn get_by_email(&self, email: &str) -> AppResult<CustomerResponse> {
        let customer = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        Ok(customer.into())
    }

    pub async fn list(&self) -> AppResult<Vec<CustomerResponse>> {
        let customers = self.repository.find_all().await?;
        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }

    pub async fn search(&self, keyword: &str) -> AppResult<Vec<CustomerResponse>> {
        let customers = self.repository.search(keyword.trim()).await?;
        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateCustomerRequest,
    ) -> AppResult<ApiResponse<CustomerResponse>> {
        request.validate()?;

        // Verificar unicidad solo si el campo cambia de dueño
        if let Some(email) = &request.email {
            if let Some(existing) = self.repository.find_by_email(email).await? {
                if existing.id != id {
                    return Err(conflict_error("Customer", "email", email));
                }
            }
        }
        if let Some(driver_license) = &request.driver_license {
            if let Some(existing) = self
                .repository
                .find_by_driver_license(driver_license)
                .await?
            {
                if existing.id != id {
                    return Err(conflict_error("Customer", "driver license", driver_license));
                }
            }
        }

        let customer = self
            .repository
            .update(
                id,
                request.first_name,
                request.last_name,
                request.email,
                request.phone_number,
                request.driver_license,
                request.address,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            customer.into(),
            "Cliente actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        // Un cliente con reservas no se puede borrar
        let rentals = self.rental_repository.find_by_customer(id).await?;
        if !rentals.is_empty() {
            return Err(AppError::Conflict(
                "El cliente tiene reservas asociadas y no puede eliminarse".to_string(),
            ));
        }

        self.repository.delete(id).await?;
        Ok(())
    }
}
