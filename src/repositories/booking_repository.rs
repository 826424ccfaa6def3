//! Repositorio del libro de reservas
//!
//! La creación comprueba el solapamiento y hace el insert dentro de una
//! misma transacción; la restricción de exclusión del schema cierra la
//! carrera entre escritores concurrentes y se traduce al mismo Conflict.

use crate::models::booking::{Booking, BookingStatus, PaymentMethod};
use crate::models::vehicle::VehicleType;
use crate::utils::errors::AppError;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

// SQLSTATE de Postgres que el insert de reservas traduce a errores de dominio
const EXCLUSION_VIOLATION: &str = "23P01";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Reserva con los datos del vehículo (listado del usuario)
#[derive(Debug, FromRow)]
pub struct BookingWithVehicle {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub vehicle_name: String,
    pub vehicle_type: VehicleType,
    pub vehicle_image: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_value: i32,
    pub payment_method: PaymentMethod,
    pub estimated_price: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Reserva con usuario y vehículo (listado del back-office)
#[derive(Debug, FromRow)]
pub struct BookingWithUserVehicle {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_email: String,
    pub vehicle_id: Uuid,
    pub vehicle_name: String,
    pub vehicle_type: VehicleType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_value: i32,
    pub payment_method: PaymentMethod,
    pub estimated_price: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Comprobar solapamiento e insertar en una sola transacción.
    pub async fn create(
        &self,
        user_id: Uuid,
        vehicle_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        duration_value: i32,
        payment_method: PaymentMethod,
        estimated_price: Decimal,
    ) -> Result<Booking, AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::Database(format!("Error starting transaction: {}", e)))?;

        // Predicado de solapamiento sobre intervalos cerrados
        let occupied: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM bookings
                WHERE vehicle_id = $1
                  AND NOT (end_date < $2 OR start_date > $3)
            )
            "#,
        )
        .bind(vehicle_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::Database(format!("Error checking booking overlap: {}", e)))?;

        if occupied.0 {
            return Err(AppError::Conflict(
                "El vehículo ya está reservado en esas fechas".to_string(),
            ));
        }

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (id, user_id, vehicle_id, start_date, end_date, duration_value, payment_method, estimated_price, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(vehicle_id)
        .bind(start_date)
        .bind(end_date)
        .bind(duration_value)
        .bind(payment_method)
        .bind(estimated_price)
        .bind(BookingStatus::Pending)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_booking_insert_error)?;

        tx.commit()
            .await
            .map_err(|e| AppError::Database(format!("Error committing booking: {}", e)))?;

        Ok(booking)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding booking: {}", e)))?;

        Ok(booking)
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<BookingWithVehicle>, AppError> {
        let bookings = sqlx::query_as::<_, BookingWithVehicle>(
            r#"
            SELECT b.id, b.vehicle_id, v.name AS vehicle_name, v.vehicle_type,
                   (v.images)[1] AS vehicle_image,
                   b.start_date, b.end_date, b.duration_value, b.payment_method,
                   b.estimated_price, b.status, b.created_at
            FROM bookings b
            JOIN vehicles v ON v.id = b.vehicle_id
            WHERE b.user_id = $1
            ORDER BY b.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing user bookings: {}", e)))?;

        Ok(bookings)
    }

    pub async fn list_all(&self) -> Result<Vec<BookingWithUserVehicle>, AppError> {
        let bookings = sqlx::query_as::<_, BookingWithUserVehicle>(
            r#"
            SELECT b.id, b.user_id, u.name AS user_name, u.email AS user_email,
                   b.vehicle_id, v.name AS vehicle_name, v.vehicle_type,
                   b.start_date, b.end_date, b.duration_value, b.payment_method,
                   b.estimated_price, b.status, b.created_at
            FROM bookings b
            JOIN users u ON u.id = b.user_id
            JOIN vehicles v ON v.id = b.vehicle_id
            ORDER BY b.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing bookings: {}", e)))?;

        Ok(bookings)
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating booking status: {}", e)))?;

        Ok(booking)
    }
}

/// Traducir los códigos de error del insert a errores de dominio:
/// la violación de la restricción de exclusión es el mismo Conflict que
/// el chequeo previo, una FK rota es una solicitud inválida.
fn map_booking_insert_error(e: sqlx::Error) -> AppError {
    if let Some(db_err) = e.as_database_error() {
        match db_err.code().as_deref() {
            Some(EXCLUSION_VIOLATION) => {
                return AppError::Conflict(
                    "El vehículo ya está reservado en esas fechas".to_string(),
                )
            }
            Some(FOREIGN_KEY_VIOLATION) => {
                return AppError::BadRequest("El usuario o el vehículo no existe".to_string())
            }
            _ => {}
        }
    }
    AppError::Database(format!("Error creating booking: {}", e))
}
