use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::booking_dto::BookingResponse;

// Request del mock de pago eSewa. El gateway manda las fechas como texto
// YYYY-MM-DD; la reserva se crea como efecto secundario.
#[derive(Debug, Deserialize)]
pub struct EsewaPaymentRequest {
    pub pid: String,
    pub amount: Decimal,
    pub esewa_id: String,
    pub vehicle_id: Uuid,
    pub start_date: String,
    pub end_date: String,
    pub duration_value: i32,
}

// Response con la redirección de éxito o fallo del gateway
#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub success: bool,
    pub redirect_url: String,
    pub message: Option<String>,
    pub booking: Option<BookingResponse>,
}

impl PaymentResponse {
    pub fn success(pid: &str, booking: BookingResponse) -> Self {
        Self {
            success: true,
            redirect_url: format!("/payment/success?pid={}", pid),
            message: None,
            booking: Some(booking),
        }
    }

    pub fn failure(pid: &str, message: String) -> Self {
        Self {
            success: false,
            redirect_url: format!("/payment/failure?pid={}", pid),
            message: Some(message),
            booking: None,
        }
    }
}
