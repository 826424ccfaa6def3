use crate::dto::auth_dto::{ApiResponse, LoginRequest, LoginResponse, RegisterRequest};
use crate::dto::user_dto::UserResponse;
use crate::models::auth::Role;
use crate::repositories::admin_repository::AdminRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};
use crate::utils::validation::validate_email;
use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use validator::Validate;

pub struct AuthController {
    users: UserRepository,
    admins: AdminRepository,
    jwt_config: JwtConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, jwt_config: JwtConfig) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            admins: AdminRepository::new(pool),
            jwt_config,
        }
    }

    pub async fn register(
        &self,
        request: RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if request.name.trim().is_empty() {
            return Err(AppError::Validation("El nombre es requerido".to_string()));
        }

        // El email debe ser único en users y admins (convención de la aplicación)
        if self.users.email_exists(&request.email).await?
            || self.admins.email_exists(&request.email).await?
        {
            return Err(AppError::Conflict("El email ya está registrado".to_string()));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        let user = self
            .users
            .create(request.name.trim().to_string(), request.email, password_hash)
            .await?;

        log::info!("Usuario registrado: {}", user.id);

        Ok(ApiResponse::success_with_message(
            UserResponse::from(user),
            "Usuario registrado exitosamente".to_string(),
        ))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        validate_email(&request.email)
            .map_err(|_| AppError::Validation("Email inválido".to_string()))?;

        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = generate_token(user.id, &user.email, &user.name, Role::User, &self.jwt_config)?;

        Ok(LoginResponse::success(
            token,
            user.id.to_string(),
            user.name,
            Role::User,
        ))
    }

    pub async fn admin_login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        validate_email(&request.email)
            .map_err(|_| AppError::Validation("Email inválido".to_string()))?;

        let admin = self
            .admins
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let valid = verify(&request.password, &admin.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token =
            generate_token(admin.id, &admin.email, &admin.name, Role::Admin, &self.jwt_config)?;

        Ok(LoginResponse::success(
            token,
            admin.id.to_string(),
            admin.name,
            Role::Admin,
        ))
    }
}
