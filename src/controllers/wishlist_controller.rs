use crate::dto::auth_dto::ApiResponse;
use crate::dto::vehicle_dto::VehicleResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::repositories::wishlist_repository::WishlistRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct WishlistController {
    wishlists: WishlistRepository,
    vehicles: VehicleRepository,
}

impl WishlistController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            wishlists: WishlistRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    /// Alta idempotente: repetirla con el mismo vehículo también es éxito.
    pub async fn add(
        &self,
        caller: &AuthenticatedUser,
        vehicle_id: Uuid,
    ) -> Result<ApiResponse<()>, AppError> {
        // El vehículo tiene que existir en el catálogo
        self.vehicles
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        self.wishlists.add(caller.id, vehicle_id).await?;

        Ok(ApiResponse::success_with_message(
            (),
            "Vehículo guardado en la lista de deseos".to_string(),
        ))
    }

    /// Baja incondicional: quitar una entrada inexistente también es éxito.
    pub async fn remove(
        &self,
        caller: &AuthenticatedUser,
        vehicle_id: Uuid,
    ) -> Result<ApiResponse<()>, AppError> {
        self.wishlists.remove(caller.id, vehicle_id).await?;

        Ok(ApiResponse::success_with_message(
            (),
            "Vehículo eliminado de la lista de deseos".to_string(),
        ))
    }

    pub async fn list(
        &self,
        caller: &AuthenticatedUser,
    ) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.wishlists.list_vehicles(caller.id).await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }
}
