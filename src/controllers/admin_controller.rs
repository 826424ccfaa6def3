//! Controller del back-office
//!
//! Gestión de usuarios y administradores: promoción atómica, alta directa
//! de administradores, borrado de usuarios y verificación de licencias.

use crate::dto::admin_dto::{AdminResponse, CreateAdminRequest, PromoteUserRequest};
use crate::dto::auth_dto::ApiResponse;
use crate::dto::user_dto::{UserResponse, VerifyLicenseRequest};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::auth::Role;
use crate::models::user::LicenseStatus;
use crate::repositories::admin_repository::AdminRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct AdminController {
    admins: AdminRepository,
    users: UserRepository,
}

impl AdminController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            admins: AdminRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    fn require_admin(caller: &AuthenticatedUser) -> Result<(), AppError> {
        match caller.role {
            Role::Admin => Ok(()),
            Role::User => Err(AppError::Forbidden(
                "Se requieren permisos de administrador".to_string(),
            )),
        }
    }

    pub async fn promote_user(
        &self,
        caller: &AuthenticatedUser,
        request: PromoteUserRequest,
    ) -> Result<ApiResponse<AdminResponse>, AppError> {
        Self::require_admin(caller)?;

        let admin = self.admins.promote_user(request.user_id).await?;

        log::info!("Usuario {} promovido a administrador {}", request.user_id, admin.id);

        Ok(ApiResponse::success_with_message(
            AdminResponse::from(admin),
            "Usuario promovido a administrador".to_string(),
        ))
    }

    pub async fn create_admin(
        &self,
        caller: &AuthenticatedUser,
        request: CreateAdminRequest,
    ) -> Result<ApiResponse<AdminResponse>, AppError> {
        Self::require_admin(caller)?;

        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        // El email debe ser único en ambas tablas
        if self.admins.email_exists(&request.email).await?
            || self.users.email_exists(&request.email).await?
        {
            return Err(AppError::Conflict("El email ya está registrado".to_string()));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        let admin = self
            .admins
            .create(request.name.trim().to_string(), request.email, password_hash)
            .await?;

        Ok(ApiResponse::success_with_message(
            AdminResponse::from(admin),
            "Administrador creado exitosamente".to_string(),
        ))
    }

    pub async fn list_admins(
        &self,
        caller: &AuthenticatedUser,
    ) -> Result<Vec<AdminResponse>, AppError> {
        Self::require_admin(caller)?;

        let admins = self.admins.list_all().await?;
        Ok(admins.into_iter().map(AdminResponse::from).collect())
    }

    pub async fn list_users(
        &self,
        caller: &AuthenticatedUser,
    ) -> Result<Vec<UserResponse>, AppError> {
        Self::require_admin(caller)?;

        let users = self.users.list_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn delete_user(
        &self,
        caller: &AuthenticatedUser,
        user_id: Uuid,
    ) -> Result<(), AppError> {
        Self::require_admin(caller)?;

        self.users.delete(user_id).await?;
        Ok(())
    }

    /// Aprobar o rechazar la licencia de un usuario. El admin puede cambiar
    /// una decisión en ambos sentidos; reafirmarla es un no-op exitoso.
    pub async fn verify_license(
        &self,
        caller: &AuthenticatedUser,
        request: VerifyLicenseRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        Self::require_admin(caller)?;

        let target = match request.status.as_str() {
            "approved" => LicenseStatus::Approved,
            "rejected" => LicenseStatus::Rejected,
            other => {
                return Err(AppError::Validation(format!(
                    "Estado de licencia inválido: '{}'",
                    other
                )))
            }
        };

        let user = self
            .users
            .find_by_id(request.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        // Sin carnet subido no hay nada que verificar
        if user.license_status.is_none() {
            return Err(AppError::Conflict(
                "El usuario no ha subido su licencia".to_string(),
            ));
        }

        let updated = self.users.set_license_status(request.user_id, target).await?;

        Ok(ApiResponse::success_with_message(
            UserResponse::from(updated),
            "Estado de licencia actualizado".to_string(),
        ))
    }
}
