use crate::dto::auth_dto::ApiResponse;
use crate::dto::user_dto::{SubmitLicenseRequest, UpdateProfileRequest, UserResponse};
use crate::middleware::auth::AuthenticatedUser;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_phone;
use sqlx::PgPool;
use validator::Validate;

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn get_profile(
        &self,
        caller: &AuthenticatedUser,
    ) -> Result<UserResponse, AppError> {
        let user = self
            .repository
            .find_by_id(caller.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(UserResponse::from(user))
    }

    pub async fn update_profile(
        &self,
        caller: &AuthenticatedUser,
        request: UpdateProfileRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if let Some(ref phone) = request.phone_number {
            validate_phone(phone)
                .map_err(|_| AppError::Validation("Número de teléfono inválido".to_string()))?;
        }

        let user = self.repository.update_profile(caller.id, request).await?;

        Ok(ApiResponse::success_with_message(
            UserResponse::from(user),
            "Perfil actualizado exitosamente".to_string(),
        ))
    }

    /// Subir o reemplazar el carnet de conducir. El estado vuelve siempre
    /// a pending hasta que un administrador lo revise.
    pub async fn submit_license(
        &self,
        caller: &AuthenticatedUser,
        request: SubmitLicenseRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        if request.license_card_url.trim().is_empty() {
            return Err(AppError::Validation(
                "La URL del carnet es requerida".to_string(),
            ));
        }

        let user = self
            .repository
            .submit_license(caller.id, request.license_card_url.trim().to_string())
            .await?;

        Ok(ApiResponse::success_with_message(
            UserResponse::from(user),
            "Licencia enviada para verificación".to_string(),
        ))
    }
}
