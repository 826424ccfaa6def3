//! Controller del libro de reservas
//!
//! Aplica las reglas de negocio antes de tocar el repositorio: fechas
//! coherentes, licencia aprobada, y el precio estimado recalculado en el
//! servidor a partir de la tarifa del vehículo.

use crate::dto::auth_dto::ApiResponse;
use crate::dto::booking_dto::{
    AdminBookingResponse, BookingResponse, CreateBookingRequest, MyBookingResponse,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::auth::Role;
use crate::models::booking::{rental_days, BookingStatus};
use crate::models::user::LicenseStatus;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Precio que el servidor espera para una tarifa y duración dadas
pub fn expected_price(rate: Decimal, duration_value: i32) -> Decimal {
    rate * Decimal::from(duration_value)
}

/// El precio enviado por el cliente se acepta solo dentro de una
/// tolerancia de redondeo de 0.01.
pub fn price_matches(submitted: Decimal, expected: Decimal) -> bool {
    (submitted - expected).abs() <= Decimal::new(1, 2)
}

pub struct BookingController {
    bookings: BookingRepository,
    vehicles: VehicleRepository,
    users: UserRepository,
}

impl BookingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            bookings: BookingRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        caller: &AuthenticatedUser,
        request: CreateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        match caller.role {
            Role::User => {}
            Role::Admin => {
                return Err(AppError::Forbidden(
                    "Solo los usuarios pueden crear reservas".to_string(),
                ))
            }
        }

        // Validar la ventana de fechas
        if request.end_date <= request.start_date {
            return Err(AppError::Validation(
                "La fecha de fin debe ser posterior a la de inicio".to_string(),
            ));
        }

        let days = rental_days(request.start_date, request.end_date);
        if i64::from(request.duration_value) != days {
            return Err(AppError::Validation(format!(
                "La duración no coincide con las fechas: se esperaban {} días",
                days
            )));
        }

        // La licencia aprobada es requisito para reservar
        let user = self
            .users
            .find_by_id(caller.id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Usuario no encontrado".to_string()))?;

        if user.license_status != Some(LicenseStatus::Approved) {
            return Err(AppError::Forbidden(
                "La licencia de conducir debe estar aprobada para reservar".to_string(),
            ));
        }

        let vehicle = self
            .vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        // Recalcular el precio en el servidor; el valor del cliente solo se
        // acepta dentro de la tolerancia de redondeo.
        let expected = expected_price(vehicle.price, request.duration_value);
        if !price_matches(request.estimated_price, expected) {
            return Err(AppError::Validation(format!(
                "El precio estimado no coincide con la tarifa: se esperaba {}",
                expected
            )));
        }

        let booking = self
            .bookings
            .create(
                caller.id,
                request.vehicle_id,
                request.start_date,
                request.end_date,
                request.duration_value,
                request.payment_method,
                expected,
            )
            .await?;

        log::info!("Reserva creada: {} para vehículo {}", booking.id, booking.vehicle_id);

        Ok(ApiResponse::success_with_message(
            BookingResponse::from(booking),
            "Reserva creada exitosamente".to_string(),
        ))
    }

    pub async fn list_mine(
        &self,
        caller: &AuthenticatedUser,
    ) -> Result<Vec<MyBookingResponse>, AppError> {
        let bookings = self.bookings.list_by_user(caller.id).await?;
        Ok(bookings.into_iter().map(MyBookingResponse::from).collect())
    }

    pub async fn list_all(
        &self,
        caller: &AuthenticatedUser,
    ) -> Result<Vec<AdminBookingResponse>, AppError> {
        match caller.role {
            Role::Admin => {}
            Role::User => {
                return Err(AppError::Forbidden(
                    "Se requieren permisos de administrador".to_string(),
                ))
            }
        }

        let bookings = self.bookings.list_all().await?;
        Ok(bookings.into_iter().map(AdminBookingResponse::from).collect())
    }

    pub async fn update_status(
        &self,
        caller: &AuthenticatedUser,
        booking_id: Uuid,
        target: BookingStatus,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        match caller.role {
            Role::Admin => {}
            Role::User => {
                return Err(AppError::Forbidden(
                    "Se requieren permisos de administrador".to_string(),
                ))
            }
        }

        let current = self
            .bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        if !current.status.can_transition_to(target) {
            return Err(AppError::Conflict(format!(
                "La reserva ya está en estado terminal {}",
                current.status.as_str()
            )));
        }

        let updated = self
            .bookings
            .update_status(booking_id, target)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        Ok(ApiResponse::success_with_message(
            BookingResponse::from(updated),
            "Estado de la reserva actualizado".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_price() {
        // Vehículo a 100/día durante 2 días
        let rate = Decimal::new(100, 0);
        assert_eq!(expected_price(rate, 2), Decimal::new(200, 0));
    }

    #[test]
    fn test_price_within_tolerance_accepted() {
        let expected = Decimal::new(20000, 2); // 200.00
        assert!(price_matches(Decimal::new(20000, 2), expected));
        assert!(price_matches(Decimal::new(20001, 2), expected)); // 200.01
        assert!(price_matches(Decimal::new(19999, 2), expected)); // 199.99
    }

    #[test]
    fn test_manipulated_price_rejected() {
        let expected = Decimal::new(20000, 2);
        assert!(!price_matches(Decimal::new(15000, 2), expected)); // 150.00
        assert!(!price_matches(Decimal::new(20002, 2), expected)); // 200.02
    }

    #[test]
    fn test_fractional_rate_price() {
        // 99.50/día durante 3 días = 298.50
        let rate = Decimal::new(9950, 2);
        assert_eq!(expected_price(rate, 3), Decimal::new(29850, 2));
    }
}
