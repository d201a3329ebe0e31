use chrono::Utc;
use sqlx::PgPool;

use crate::dto::dashboard_dto::{DashboardStatsResponse, MonthlyEarningsResponse};
use crate::models::car::CarStatus;
use crate::models::rental::RentalStatus;
use crate::repositories::car_repository::CarRepository;
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::rental_repository::RentalRepository;
use crate::utils::errors::AppResult;

pub struct DashboardController {
    car_repository: CarRepository,
    customer_repository: CustomerRepository,
    rental_repository: RentalRepository,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            car_repository: CarRepository::new(pool.clone()),
            customer_repository: CustomerRepository::new(pool.clone()),
            rental_repository: RentalRepository::new(pool),
        }
    }

    /// Contadores agregados de flota, clientes y reservas.
    /// Los ingresos suman únicamente reservas COMPLETED.
    pub async fn stats(&self) -> AppResult<DashboardStatsResponse> {
        let today = Utc::now().date_naive();

        let total_cars = self.car_repository.count_all().await?;
        let available_cars = self
            .car_repository
            .count_by_status(CarStatus::Available.as_str())
            .await?;
        let total_customers = self.customer_repository.count_all().await?;
        let active_rentals = self
            .rental_repository
            .count_by_status(RentalStatus::Active.as_str())
            .await?;
        let completed_rentals = self
            .rental_repository
            .count_by_status(RentalStatus::Completed.as_str())
            .await?;
        let cancelled_rentals = self
            .rental_repository
            .count_by_status(RentalStatus::Cancelled.as_str())
            .await?;
        let overdue_rentals = self.rental_repository.count_overdue(today).await?;
        let total_revenue_cents = self.rental_repository.total_revenue_cents().await?;

        Ok(DashboardStatsResponse {
            total_cars,
            available_cars,
            total_customers,
            active_rentals,
            completed_rentals,
            cancelled_rentals,
            overdue_rentals,
            total_revenue_cents,
        })
    }

    /// Ingresos por mes de devolución de reservas COMPLETED
    pub async fn earnings(&self) -> AppResult<Vec<MonthlyEarningsResponse>> {
        let rows = self.rental_repository.monthly_earnings().await?;
        Ok(rows
            .into_iter()
            .map(|(month, completed_rentals, revenue_cents)| MonthlyEarningsResponse {
                month,
                completed_rentals,
                revenue_cents,
            })
            .collect())
    }
}
