use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::booking::{Booking, BookingStatus, PaymentMethod};
use crate::models::vehicle::VehicleType;
use crate::repositories::booking_repository::{BookingWithUserVehicle, BookingWithVehicle};

// Request para crear una reserva. Los seis campos son obligatorios.
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub vehicle_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_value: i32,
    pub payment_method: PaymentMethod,
    pub estimated_price: Decimal,
}

// Request para la transición de estado (solo admin)
#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
}

// Response de reserva
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_value: i32,
    pub payment_method: PaymentMethod,
    pub estimated_price: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            user_id: b.user_id,
            vehicle_id: b.vehicle_id,
            start_date: b.start_date,
            end_date: b.end_date,
            duration_value: b.duration_value,
            payment_method: b.payment_method,
            estimated_price: b.estimated_price,
            status: b.status,
            created_at: b.created_at,
        }
    }
}

// Reserva del usuario con los datos del vehículo para el listado "mis reservas"
#[derive(Debug, Serialize)]
pub struct MyBookingResponse {
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

impl From<BookingWithVehicle> for MyBookingResponse {
    fn from(row: BookingWithVehicle) -> Self {
        Self {
            id: row.id,
            vehicle_id: row.vehicle_id,
            vehicle_name: row.vehicle_name,
            vehicle_type: row.vehicle_type,
            vehicle_image: row.vehicle_image,
            start_date: row.start_date,
            end_date: row.end_date,
            duration_value: row.duration_value,
            payment_method: row.payment_method,
            estimated_price: row.estimated_price,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

// Reserva con usuario y vehículo para el back-office
#[derive(Debug, Serialize)]
pub struct AdminBookingResponse {
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

impl From<BookingWithUserVehicle> for AdminBookingResponse {
    fn from(row: BookingWithUserVehicle) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            user_name: row.user_name,
            user_email: row.user_email,
            vehicle_id: row.vehicle_id,
            vehicle_name: row.vehicle_name,
            vehicle_type: row.vehicle_type,
            start_date: row.start_date,
            end_date: row.end_date,
            duration_value: row.duration_value,
            payment_method: row.payment_method,
            estimated_price: row.estimated_price,
            status: row.status,
            created_at: row.created_at,
        }
    }
}
