use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::car_dto::{CarResponse, CreateCarRequest, UpdateCarRequest};
use crate::dto::common::ApiResponse;
use crate::models::car::CarStatus;
use crate::repositories::car_repository::CarRepository;
use crate::repositories::rental_repository::RentalRepository;
use crate::utils::errors::{conflict_error, AppError, AppResult};

pub struct CarController {
    repository: CarRepository,
    rental_repository: RentalRepository,
}

impl CarController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CarRepository::new(pool.clone()),
            rental_repository: RentalRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateCarRequest) -> AppResult<ApiResponse<CarResponse>> {
        request.validate()?;

        // Verificar que la matrícula no exista
        if self
            .repository
            .license_plate_exists(&request.license_plate, None)
            .await?
        {
            return Err(conflict_error("Car", "license plate", &request.license_plate));
        }

        let car = self
            .repository
            .create(
                request.make,
                request.model,
                request.year,
                request.license_plate,
                request.daily_rate_cents,
                request.fuel_type,
                request.transmission_type,
                request.seating_capacity,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            car.into(),
            "Coche creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<CarResponse> {
        let car = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

        Ok(car.into())
    }

    pub async fn list(&self) -> AppResult<Vec<CarResponse>> {
        let cars = self.repository.find_all().await?;
        Ok(cars.into_iter().map(CarResponse::from).collect())
    }

    /// Filtro por status == AVAILABLE; sin chequeo temporal de reservas
    pub async fn list_available(&self) -> AppResult<Vec<CarResponse>> {
        let cars = self
            .repository
            .find_by_status(CarStatus::Available.as_str())
            .await?;
        Ok(cars.into_iter().map(CarResponse::from).collect())
    }

    pub async fn search(&self, keyword: &str) -> AppResult<Vec<CarResponse>> {
        let cars = self.repository.search(keyword.trim()).await?;
        Ok(cars.into_iter().map(CarResponse::from).collect())
    }

    pub async fn filter_by_rate(
        &self,
        min_rate_cents: i64,
        max_rate_cents: i64,
    ) -> AppResult<Vec<CarResponse>> {
        if min_rate_cents < 0 || max_rate_cents < min_rate_cents {
            return Err(AppError::BadRequest(
                "minRateCents must be non-negative and not greater than maxRateCents".to_string(),
            ));
        }

        let cars = self
            .repository
            .find_by_rate_range(min_rate_cents, max_rate_cents)
            .await?;
        Ok(cars.into_iter().map(CarResponse::from).collect())
    }

    pub async fn list_by_make_and_model(
        &self,
        make: &str,
        model: &str,
    ) -> AppResult<Vec<CarResponse>> {
        let cars = self.repository.find_by_make_and_model(make, model).await?;
        Ok(cars.into_iter().map(CarResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateCarRequest,
    ) -> AppResult<ApiResponse<CarResponse>> {
        request.validate()?;

        // Si cambia la matrícula, verificar unicidad excluyendo este coche
        if let Some(license_plate) = &request.license_plate {
            if self
                .repository
                .license_plate_exists(license_plate, Some(id))
                .await?
            {
                return Err(conflict_error("Car", "license plate", license_plate));
            }
        }

        let car = self
            .repository
            .update(
                id,
                request.make,
                request.model,
                request.year,
                request.license_plate,
                request.daily_rate_cents,
                request.fuel_type,
                request.transmission_type,
                request.seating_capacity,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            car.into(),
            "Coche actualizado exitosamente".to_string(),
        ))
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> AppResult<CarResponse> {
        let status = CarStatus::parse(status).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Invalid status '{}', allowed values: AVAILABLE, RENTED, MAINTENANCE, OUT_OF_SERVICE",
                status
            ))
        })?;

        let car = self.repository.update_status(id, status.as_str()).await?;
        Ok(car.into())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let car = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))?;

        // Un coche con reservas no se puede borrar
        let rentals = self.rental_repository.count_for_car(car.id).await?;
        if rentals > 0 {
            return Err(AppError::Conflict(
                "El coche tiene reservas asociadas y no puede eliminarse".to_string(),
            ));
        }

        self.repository.delete(id).await?;
        Ok(())
    }
}
