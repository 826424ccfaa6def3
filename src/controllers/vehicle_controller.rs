use crate::dto::auth_dto::ApiResponse;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleFilters, VehicleResponse,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::auth::Role;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        caller: &AuthenticatedUser,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        match caller.role {
            Role::Admin => {}
            Role::User => {
                return Err(AppError::Forbidden(
                    "Se requieren permisos de administrador".to_string(),
                ))
            }
        }

        // Validar campos
        if request.name.trim().is_empty() {
            return Err(AppError::Validation("El nombre es requerido".to_string()));
        }

        if request.location.trim().is_empty() {
            return Err(AppError::Validation("La ubicación es requerida".to_string()));
        }

        if request.price <= Decimal::ZERO {
            return Err(AppError::Validation(
                "La tarifa por día debe ser positiva".to_string(),
            ));
        }

        if request.seats < 1 {
            return Err(AppError::Validation(
                "El vehículo debe tener al menos un asiento".to_string(),
            ));
        }

        let vehicle = self
            .repository
            .create(
                request.name.trim().to_string(),
                request.vehicle_type,
                request.price,
                request.seats,
                request.location.trim().to_string(),
                request.color.unwrap_or_default(),
                request.fuel_type.unwrap_or_default(),
                request.images.unwrap_or_default(),
                request.tags.unwrap_or_default(),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn list(&self, filters: VehicleFilters) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.list(&filters).await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        caller: &AuthenticatedUser,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        match caller.role {
            Role::Admin => {}
            Role::User => {
                return Err(AppError::Forbidden(
                    "Se requieren permisos de administrador".to_string(),
                ))
            }
        }

        if let Some(ref price) = request.price {
            if *price <= Decimal::ZERO {
                return Err(AppError::Validation(
                    "La tarifa por día debe ser positiva".to_string(),
                ));
            }
        }

        if let Some(seats) = request.seats {
            if seats < 1 {
                return Err(AppError::Validation(
                    "El vehículo debe tener al menos un asiento".to_string(),
                ));
            }
        }

        let vehicle = self.repository.update(id, request).await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, caller: &AuthenticatedUser, id: Uuid) -> Result<(), AppError> {
        match caller.role {
            Role::Admin => {}
            Role::User => {
                return Err(AppError::Forbidden(
                    "Se requieren permisos de administrador".to_string(),
                ))
            }
        }

        self.repository.delete(id).await?;
        Ok(())
    }
}
