//! Controller del mock de pago eSewa
//!
//! El pago crea la reserva como efecto secundario pasando por el mismo
//! pipeline que una reserva normal, y deja constancia de la transacción
//! con su resultado.

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::CreateBookingRequest;
use crate::dto::payment_dto::{EsewaPaymentRequest, PaymentResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::booking::PaymentMethod;
use crate::models::payment::TransactionStatus;
use crate::repositories::payment_repository::PaymentRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::{validate_date, validate_not_empty, validate_positive};
use sqlx::PgPool;

pub struct PaymentController {
    payments: PaymentRepository,
    bookings: BookingController,
}

impl PaymentController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            payments: PaymentRepository::new(pool.clone()),
            bookings: BookingController::new(pool),
        }
    }

    pub async fn submit_esewa(
        &self,
        caller: &AuthenticatedUser,
        request: EsewaPaymentRequest,
    ) -> Result<PaymentResponse, AppError> {
        validate_not_empty(&request.pid)
            .map_err(|_| AppError::Validation("El pid es requerido".to_string()))?;

        validate_not_empty(&request.esewa_id)
            .map_err(|_| AppError::Validation("El esewa_id es requerido".to_string()))?;

        validate_positive(request.amount)
            .map_err(|_| AppError::Validation("El monto debe ser positivo".to_string()))?;

        // El gateway manda las fechas como texto YYYY-MM-DD
        let start_date = validate_date(&request.start_date)
            .map_err(|_| AppError::Validation("Fecha de inicio inválida".to_string()))?;
        let end_date = validate_date(&request.end_date)
            .map_err(|_| AppError::Validation("Fecha de fin inválida".to_string()))?;

        let booking_request = CreateBookingRequest {
            vehicle_id: request.vehicle_id,
            start_date,
            end_date,
            duration_value: request.duration_value,
            payment_method: PaymentMethod::Esewa,
            estimated_price: request.amount,
        };

        match self.bookings.create(caller, booking_request).await {
            Ok(response) => {
                let booking = response
                    .data
                    .ok_or_else(|| AppError::Internal("Reserva sin datos".to_string()))?;

                self.payments
                    .record(
                        request.pid.clone(),
                        caller.id,
                        request.vehicle_id,
                        Some(booking.id),
                        request.esewa_id,
                        booking.estimated_price,
                        TransactionStatus::Complete,
                    )
                    .await?;

                log::info!("Pago eSewa completado: pid {}", request.pid);

                Ok(PaymentResponse::success(&request.pid, booking))
            }

            // Una ventana ocupada se reporta como redirección de fallo del
            // gateway; el resto de errores conserva su código HTTP.
            Err(AppError::Conflict(message)) => {
                self.payments
                    .record(
                        request.pid.clone(),
                        caller.id,
                        request.vehicle_id,
                        None,
                        request.esewa_id,
                        request.amount,
                        TransactionStatus::Failed,
                    )
                    .await?;

                log::warn!("Pago eSewa fallido: pid {} ({})", request.pid, message);

                Ok(PaymentResponse::failure(&request.pid, message))
            }

            Err(other) => Err(other),
        }
    }
}
