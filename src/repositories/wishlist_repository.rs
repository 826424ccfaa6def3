use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct WishlistRepository {
    pool: PgPool,
}

impl WishlistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Alta idempotente: si la entrada ya existe no cambia nada.
    pub async fn add(&self, user_id: Uuid, vehicle_id: Uuid) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO wishlists (user_id, vehicle_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, vehicle_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(vehicle_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error adding wishlist entry: {}", e)))?;

        Ok(())
    }

    /// Baja incondicional: borrar una entrada inexistente también es éxito.
    pub async fn remove(&self, user_id: Uuid, vehicle_id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM wishlists WHERE user_id = $1 AND vehicle_id = $2")
            .bind(user_id)
            .bind(vehicle_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error removing wishlist entry: {}", e)))?;

        Ok(())
    }

    pub async fn list_vehicles(&self, user_id: Uuid) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT v.*
            FROM wishlists w
            JOIN vehicles v ON v.id = w.vehicle_id
            WHERE w.user_id = $1
            ORDER BY w.created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing wishlist: {}", e)))?;

        Ok(vehicles)
    }
}
