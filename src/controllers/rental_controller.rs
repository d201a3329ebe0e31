//! Controller de reservas
//!
//! Implementa el ciclo de vida de la reserva: creación con chequeo de
//! disponibilidad y de solapamiento, transición a COMPLETED (idempotente)
//! y a CANCELLED, y el presupuesto de coste. OVERDUE se deriva al
//! construir cada respuesta; nunca se persiste.

use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::rental_dto::{CreateRentalRequest, RentalResponse, UpdateRentalRequest};
use crate::models::rental::{Rental, RentalStatus};
use crate::repositories::car_repository::CarRepository;
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::rental_repository::RentalRepository;
use crate::services::pricing::{self, CostQuote};
use crate::utils::errors::{AppError, AppResult};

pub struct RentalController {
    repository: RentalRepository,
    car_repository: CarRepository,
    customer_repository: CustomerRepository,
}

impl RentalController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RentalRepository::new(pool.clone()),
            car_repository: CarRepository::new(pool.clone()),
            customer_repository: CustomerRepository::new(pool),
        }
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    pub async fn create(
        &self,
        request: CreateRentalRequest,
    ) -> AppResult<ApiResponse<RentalResponse>> {
        request.validate()?;

        // Verificar que el cliente existe
        if !self.customer_repository.exists(request.customer_id).await? {
            return Err(AppError::NotFound(format!(
                "Customer with id '{}' not found",
                request.customer_id
            )));
        }

        // Verificar que el coche existe y está disponible
        let car = self
            .car_repository
            .find_by_id(request.car_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Car with id '{}' not found", request.car_id))
            })?;

        if !car.is_available() {
            return Err(AppError::Conflict(
                "El coche no está disponible para alquiler".to_string(),
            ));
        }

        // El presupuesto valida el orden de fechas antes de tocar nada
        let quote = pricing::quote(car.daily_rate_cents, request.start_date, request.end_date)?;

        // Verificar solapamiento con reservas activas del mismo coche
        let conflicting = self
            .repository
            .find_conflicting(request.car_id, request.start_date, request.end_date)
            .await?;
        if !conflicting.is_empty() {
            return Err(AppError::Conflict(
                "El coche ya está reservado en las fechas seleccionadas".to_string(),
            ));
        }

        let rental = self
            .repository
            .create(
                request.car_id,
                request.customer_id,
                request.start_date,
                request.end_date,
                quote.total_cost_cents,
                request.notes,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            RentalResponse::from_rental(rental, Self::today()),
            "Reserva creada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<RentalResponse> {
        let rental = self.find_rental(id).await?;
        Ok(RentalResponse::from_rental(rental, Self::today()))
    }

    pub async fn list(&self) -> AppResult<Vec<RentalResponse>> {
        let rentals = self.repository.find_all().await?;
        Ok(Self::to_responses(rentals))
    }

    pub async fn list_by_status(&self, status: &str) -> AppResult<Vec<RentalResponse>> {
        let status = RentalStatus::parse(status).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Invalid status '{}', allowed values: ACTIVE, COMPLETED, CANCELLED",
                status
            ))
        })?;

        let rentals = self.repository.find_by_status(status.as_str()).await?;
        Ok(Self::to_responses(rentals))
    }

    pub async fn list_overdue(&self) -> AppResult<Vec<RentalResponse>> {
        let rentals = self.repository.find_overdue(Self::today()).await?;
        Ok(Self::to_responses(rentals))
    }

    pub async fn list_by_customer(&self, customer_id: Uuid) -> AppResult<Vec<RentalResponse>> {
        let rentals = self.repository.find_by_customer(customer_id).await?;
        Ok(Self::to_responses(rentals))
    }

    pub async fn list_by_car(&self, car_id: Uuid) -> AppResult<Vec<RentalResponse>> {
        let rentals = self.repository.find_by_car(car_id).await?;
        Ok(Self::to_responses(rentals))
    }

    pub async fn list_by_date_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<Vec<RentalResponse>> {
        if end_date < start_date {
            return Err(AppError::BadRequest(
                "endDate must not be before startDate".to_string(),
            ));
        }

        let rentals = self
            .repository
            .find_by_start_date_between(start_date, end_date)
            .await?;
        Ok(Self::to_responses(rentals))
    }

    /// Presupuesto sin efectos: mismo cálculo que usa la creación
    pub async fn calculate_cost(
        &self,
        car_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<CostQuote> {
        let car = self
            .car_repository
            .find_by_id(car_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Car with id '{}' not found", car_id)))?;

        pricing::quote(car.daily_rate_cents, start_date, end_date)
    }

    /// Solo reservas ACTIVE admiten cambios de fechas/notas; el coste se
    /// recalcula con la tarifa actual del coche
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateRentalRequest,
    ) -> AppResult<ApiResponse<RentalResponse>> {
        request.validate()?;

        let rental = self.find_rental(id).await?;
        if rental.status() != RentalStatus::Active {
            return Err(AppError::Conflict(
                "Solo se pueden modificar reservas activas".to_string(),
            ));
        }

        let car = self
            .car_repository
            .find_by_id(rental.car_id)
            .await?
            .ok_or_else(|| AppError::Internal("rental references a missing car".to_string()))?;

        let start_date = request.start_date.unwrap_or(rental.start_date);
        let end_date = request.end_date.unwrap_or(rental.end_date);
        let quote = pricing::quote(car.daily_rate_cents, start_date, end_date)?;

        let updated = self
            .repository
            .update_dates(
                id,
                start_date,
                end_date,
                quote.total_cost_cents,
                request.notes.or(rental.notes),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            RentalResponse::from_rental(updated, Self::today()),
            "Reserva actualizada exitosamente".to_string(),
        ))
    }

    /// ACTIVE -> COMPLETED; fija actual_return_date y libera el coche.
    /// Repetir la operación sobre una reserva COMPLETED la devuelve sin
    /// cambios; sobre una CANCELLED es un conflicto.
    pub async fn complete(
        &self,
        id: Uuid,
        actual_return_date: NaiveDate,
    ) -> AppResult<RentalResponse> {
        let rental = self.find_rental(id).await?;

        match rental.status() {
            RentalStatus::Completed => {
                Ok(RentalResponse::from_rental(rental, Self::today()))
            }
            RentalStatus::Cancelled => Err(AppError::Conflict(
                "Una reserva cancelada no puede completarse".to_string(),
            )),
            RentalStatus::Active => {
                if actual_return_date < rental.start_date {
                    return Err(AppError::BadRequest(
                        "actualReturnDate must not be before the rental start date".to_string(),
                    ));
                }

                let completed = self.repository.complete(id, actual_return_date).await?;
                Ok(RentalResponse::from_rental(completed, Self::today()))
            }
        }
    }

    /// ACTIVE -> CANCELLED; libera el coche. Cancelar dos veces devuelve
    /// la reserva sin cambios; una COMPLETED no puede cancelarse.
    pub async fn cancel(&self, id: Uuid) -> AppResult<RentalResponse> {
        let rental = self.find_rental(id).await?;

        match rental.status() {
            RentalStatus::Cancelled => {
                Ok(RentalResponse::from_rental(rental, Self::today()))
            }
            RentalStatus::Completed => Err(AppError::Conflict(
                "Una reserva completada no puede cancelarse".to_string(),
            )),
            RentalStatus::Active => {
                let cancelled = self.repository.cancel(id).await?;
                Ok(RentalResponse::from_rental(cancelled, Self::today()))
            }
        }
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let rental = self.find_rental(id).await?;

        // Si la reserva estaba activa el coche vuelve a estar disponible
        let free_car = (rental.status() == RentalStatus::Active).then_some(rental.car_id);
        self.repository.delete(id, free_car).await?;
        Ok(())
    }

    async fn find_rental(&self, id: Uuid) -> AppResult<Rental> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Rental with id '{}' not found", id)))
    }

    fn to_responses(rentals: Vec<Rental>) -> Vec<RentalResponse> {
        let today = Self::today();
        rentals
            .into_iter()
            .map(|rental| RentalResponse::from_rental(rental, today))
            .collect()
    }
}
