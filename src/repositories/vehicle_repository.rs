use crate::dto::vehicle_dto::{UpdateVehicleRequest, VehicleFilters};
use crate::models::vehicle::{Vehicle, VehicleType};
use crate::utils::errors::AppError;
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        vehicle_type: VehicleType,
        price: Decimal,
        seats: i32,
        location: String,
        color: String,
        fuel_type: String,
        images: Vec<String>,
        tags: Vec<String>,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, name, vehicle_type, price, seats, location, color, fuel_type, images, tags, rating, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 0, $11)
            RETURNING *
            "#
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(vehicle_type)
        .bind(price)
        .bind(seats)
        .bind(location)
        .bind(color)
        .bind(fuel_type)
        .bind(images)
        .bind(tags)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating vehicle: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding vehicle: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn list(&self, filters: &VehicleFilters) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT * FROM vehicles
            WHERE ($1::vehicle_type IS NULL OR vehicle_type = $1)
              AND ($2::text IS NULL OR location ILIKE '%' || $2 || '%')
              AND ($3::numeric IS NULL OR price <= $3)
            ORDER BY created_at DESC
            "#,
        )
        .bind(filters.vehicle_type)
        .bind(filters.location.as_deref())
        .bind(filters.max_price)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing vehicles: {}", e)))?;

        Ok(vehicles)
    }

    pub async fn update(&self, id: Uuid, request: UpdateVehicleRequest) -> Result<Vehicle, AppError> {
        // Obtener vehículo actual para el update parcial
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET name = $2, vehicle_type = $3, price = $4, seats = $5, location = $6,
                color = $7, fuel_type = $8, images = $9, tags = $10, rating = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.name.unwrap_or(current.name))
        .bind(request.vehicle_type.unwrap_or(current.vehicle_type))
        .bind(request.price.unwrap_or(current.price))
        .bind(request.seats.unwrap_or(current.seats))
        .bind(request.location.unwrap_or(current.location))
        .bind(request.color.unwrap_or(current.color))
        .bind(request.fuel_type.unwrap_or(current.fuel_type))
        .bind(request.images.unwrap_or(current.images))
        .bind(request.tags.unwrap_or(current.tags))
        .bind(request.rating.unwrap_or(current.rating))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating vehicle: {}", e)))?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                // Un vehículo referenciado por reservas no se puede borrar
                if let Some(db_err) = e.as_database_error() {
                    if db_err.code().as_deref() == Some("23503") {
                        return AppError::Conflict(
                            "El vehículo tiene reservas asociadas".to_string(),
                        );
                    }
                }
                AppError::Database(format!("Error deleting vehicle: {}", e))
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vehículo no encontrado".to_string()));
        }

        Ok(())
    }
}
