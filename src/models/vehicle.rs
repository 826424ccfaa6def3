//! Modelo de Vehicle
//!
//! Mapea exactamente a la tabla vehicles.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipo de vehículo del catálogo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "vehicle_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Bike,
    Scooter,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub vehicle_type: VehicleType,
    /// Tarifa por día
    pub price: Decimal,
    pub seats: i32,
    pub location: String,
    pub color: String,
    pub fuel_type: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_type_serde() {
        assert_eq!(serde_json::to_string(&VehicleType::Scooter).unwrap(), "\"scooter\"");
        let vt: VehicleType = serde_json::from_str("\"bike\"").unwrap();
        assert_eq!(vt, VehicleType::Bike);
        assert!(serde_json::from_str::<VehicleType>("\"truck\"").is_err());
    }
}
