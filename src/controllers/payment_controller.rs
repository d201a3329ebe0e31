use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::payment_dto::{
    CreatePaymentMethodRequest, CreatePaymentRequest, PaymentMethodResponse, PaymentResponse,
    UpdatePaymentMethodRequest,
};
use crate::models::payment::{PaymentMethodStatus, PaymentStatus};
use crate::repositories::payment_repository::PaymentRepository;
use crate::repositories::rental_repository::RentalRepository;
use crate::utils::errors::{conflict_error, AppError, AppResult};

pub struct PaymentController {
    repository: PaymentRepository,
    rental_repository: RentalRepository,
}

impl PaymentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PaymentRepository::new(pool.clone()),
            rental_repository: RentalRepository::new(pool),
        }
    }

    // ----- pagos -----

    pub async fn create_payment(
        &self,
        request: CreatePaymentRequest,
    ) -> AppResult<ApiResponse<PaymentResponse>> {
        request.validate()?;

        // El pago referencia una reserva existente
        if self
            .rental_repository
            .find_by_id(request.rental_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Rental with id '{}' not found",
                request.rental_id
            )));
        }

        if self
            .repository
            .payment_reference_exists(&request.reference)
            .await?
        {
            return Err(conflict_error("Payment", "reference", &request.reference));
        }

        let payment = self
            .repository
            .create_payment(
                request.rental_id,
                request.amount_cents,
                request.method,
                request.card_last4,
                request.reference,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            payment.into(),
            "Pago registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_payment(&self, id: Uuid) -> AppResult<PaymentResponse> {
        let payment = self
            .repository
            .find_payment_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

        Ok(payment.into())
    }

    pub async fn list_payments(&self, status: Option<&str>) -> AppResult<Vec<PaymentResponse>> {
        if let Some(status) = status {
            if PaymentStatus::parse(status).is_none() {
                return Err(AppError::BadRequest(format!(
                    "Invalid status '{}', allowed values: COMPLETED, PENDING, FAILED",
                    status
                )));
            }
        }

        let payments = self.repository.find_all_payments(status).await?;
        Ok(payments.into_iter().map(PaymentResponse::from).collect())
    }

    // ----- métodos de pago -----

    pub async fn create_method(
        &self,
        request: CreatePaymentMethodRequest,
    ) -> AppResult<ApiResponse<PaymentMethodResponse>> {
        request.validate()?;

        let method = self
            .repository
            .create_method(
                request.method_type,
                request.provider,
                request.last4,
                request.expiry_month,
                request.expiry_year,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            method.into(),
            "Método de pago registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_method(&self, id: Uuid) -> AppResult<PaymentMethodResponse> {
        let method = self
            .repository
            .find_method_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment method not found".to_string()))?;

        Ok(method.into())
    }

    pub async fn list_methods(&self) -> AppResult<Vec<PaymentMethodResponse>> {
        let methods = self.repository.find_all_methods().await?;
        Ok(methods
            .into_iter()
            .map(PaymentMethodResponse::from)
            .collect())
    }

    pub async fn update_method(
        &self,
        id: Uuid,
        request: UpdatePaymentMethodRequest,
    ) -> AppResult<ApiResponse<PaymentMethodResponse>> {
        request.validate()?;

        if let Some(status) = &request.status {
            if PaymentMethodStatus::parse(status).is_none() {
                return Err(AppError::BadRequest(format!(
                    "Invalid status '{}', allowed values: ACTIVE, EXPIRED, DISABLED",
                    status
                )));
            }
        }

        let method = self
            .repository
            .update_method(
                id,
                request.provider,
                request.expiry_month,
                request.expiry_year,
                request.status,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            method.into(),
            "Método de pago actualizado exitosamente".to_string(),
        ))
    }

    /// Convertir en el único método por defecto
    pub async fn set_default_method(&self, id: Uuid) -> AppResult<PaymentMethodResponse> {
        let method = self.repository.set_default_method(id).await?;
        Ok(method.into())
    }

    pub async fn delete_method(&self, id: Uuid) -> AppResult<()> {
        self.repository.delete_method(id).await?;
        Ok(())
    }
}
