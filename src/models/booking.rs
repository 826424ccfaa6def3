//! Modelo de Booking
//!
//! Este módulo contiene el libro de reservas: la fila que mapea a la tabla
//! bookings, el ciclo de vida de estados y el predicado de solapamiento de
//! ventanas de reserva.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de una reserva. `Confirmed` y `Rejected` son terminales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Rejected,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Rejected => "Rejected",
        }
    }

    /// Reglas de transición: desde `Pending` se puede pasar a cualquier
    /// estado; reafirmar el estado actual es un no-op permitido; salir de
    /// un estado terminal no está permitido.
    pub fn can_transition_to(self, target: BookingStatus) -> bool {
        self == target || self == BookingStatus::Pending
    }
}

/// Método de pago de una reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_method", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Esewa,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
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

/// Dos ventanas de reserva `[start, end]` (intervalo cerrado) se solapan
/// si ninguna termina antes de que empiece la otra.
pub fn windows_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    !(a_end < b_start || a_start > b_end)
}

/// Días de alquiler de una ventana `[start, end]`
pub fn rental_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_overlapping_window_detected() {
        // Reserva existente del 10 al 15 de enero
        let existing = (date(2024, 1, 10), date(2024, 1, 15));

        // Solicitud del 12 al 20 de enero: se solapa
        assert!(windows_overlap(existing.0, existing.1, date(2024, 1, 12), date(2024, 1, 20)));
    }

    #[test]
    fn test_adjacent_window_allowed() {
        let existing = (date(2024, 1, 10), date(2024, 1, 15));

        // Del 16 al 20 de enero: libre
        assert!(!windows_overlap(existing.0, existing.1, date(2024, 1, 16), date(2024, 1, 20)));
    }

    #[test]
    fn test_shared_boundary_day_conflicts() {
        // Intervalo cerrado: el día final sigue ocupado
        let existing = (date(2024, 1, 10), date(2024, 1, 15));
        assert!(windows_overlap(existing.0, existing.1, date(2024, 1, 15), date(2024, 1, 20)));
    }

    #[test]
    fn test_contained_window_conflicts() {
        let existing = (date(2024, 1, 10), date(2024, 1, 20));
        assert!(windows_overlap(existing.0, existing.1, date(2024, 1, 12), date(2024, 1, 14)));
    }

    #[test]
    fn test_earlier_window_allowed() {
        let existing = (date(2024, 1, 10), date(2024, 1, 15));
        assert!(!windows_overlap(existing.0, existing.1, date(2024, 1, 5), date(2024, 1, 9)));
    }

    #[test]
    fn test_rental_days() {
        assert_eq!(rental_days(date(2024, 6, 1), date(2024, 6, 3)), 2);
        assert_eq!(rental_days(date(2024, 6, 1), date(2024, 6, 2)), 1);
    }

    // Decisión de diseño: Confirmed y Rejected son estados terminales.
    #[test]
    fn test_pending_can_transition_anywhere() {
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Confirmed));
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Rejected));
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Pending));
    }

    #[test]
    fn test_confirmed_is_terminal() {
        assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Rejected));
        assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Pending));
        // Reafirmar el mismo estado es un no-op permitido
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Confirmed));
    }

    #[test]
    fn test_rejected_is_terminal() {
        assert!(!BookingStatus::Rejected.can_transition_to(BookingStatus::Confirmed));
        assert!(!BookingStatus::Rejected.can_transition_to(BookingStatus::Pending));
        assert!(BookingStatus::Rejected.can_transition_to(BookingStatus::Rejected));
    }

    #[test]
    fn test_status_serde() {
        assert_eq!(serde_json::to_string(&BookingStatus::Pending).unwrap(), "\"Pending\"");
        let status: BookingStatus = serde_json::from_str("\"Confirmed\"").unwrap();
        assert_eq!(status, BookingStatus::Confirmed);
    }

    #[test]
    fn test_payment_method_serde() {
        assert_eq!(serde_json::to_string(&PaymentMethod::Esewa).unwrap(), "\"esewa\"");
        assert!(serde_json::from_str::<PaymentMethod>("\"paypal\"").is_err());
    }
}
