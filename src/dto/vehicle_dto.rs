use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::vehicle::{Vehicle, VehicleType};

// Request para crear un vehículo
#[derive(Debug, Deserialize)]
pub struct CreateVehicleRequest {
    pub name: String,
    pub vehicle_type: VehicleType,
    pub price: Decimal,
    pub seats: i32,
    pub location: String,
    pub color: Option<String>,
    pub fuel_type: Option<String>,
    pub images: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

// Request para actualizar un vehículo
#[derive(Debug, Deserialize)]
pub struct UpdateVehicleRequest {
    pub name: Option<String>,
    pub vehicle_type: Option<VehicleType>,
    pub price: Option<Decimal>,
    pub seats: Option<i32>,
    pub location: Option<String>,
    pub color: Option<String>,
    pub fuel_type: Option<String>,
    pub images: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub rating: Option<f64>,
}

// Filtros de búsqueda del catálogo
#[derive(Debug, Default, Deserialize)]
pub struct VehicleFilters {
    pub vehicle_type: Option<VehicleType>,
    pub location: Option<String>,
    pub max_price: Option<Decimal>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub name: String,
    pub vehicle_type: VehicleType,
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

impl From<Vehicle> for VehicleResponse {
    fn from(v: Vehicle) -> Self {
        Self {
            id: v.id,
            name: v.name,
            vehicle_type: v.vehicle_type,
            price: v.price,
            seats: v.seats,
            location: v.location,
            color: v.color,
            fuel_type: v.fuel_type,
            images: v.images,
            tags: v.tags,
            rating: v.rating,
            created_at: v.created_at,
        }
    }
}
