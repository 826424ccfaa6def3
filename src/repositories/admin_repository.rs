//! Repositorio de administradores
//!
//! Contiene la transacción de promoción: insertar la fila en admins y
//! borrar la de users comparten una única transacción, de manera que la
//! identidad nunca queda en ambas tablas ni en ninguna.

use crate::models::admin::Admin;
use crate::models::user::User;
use crate::utils::errors::AppError;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
    ) -> Result<Admin, AppError> {
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins (id, name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_admin_write_error)?;

        Ok(admin)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Admin>, AppError> {
        let admin = sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding admin: {}", e)))?;

        Ok(admin)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AppError> {
        let admin = sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error finding admin by email: {}", e)))?;

        Ok(admin)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM admins WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::Database(format!("Error checking admin email: {}", e)))?;

        Ok(result.0)
    }

    pub async fn list_all(&self) -> Result<Vec<Admin>, AppError> {
        let admins = sqlx::query_as::<_, Admin>("SELECT * FROM admins ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error listing admins: {}", e)))?;

        Ok(admins)
    }

    /// Promoción atómica de usuario a administrador. Los pasos comparten
    /// una transacción: cualquier fallo la revierte entera.
    pub async fn promote_user(&self, user_id: Uuid) -> Result<Admin, AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::Database(format!("Error starting transaction: {}", e)))?;

        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::Database(format!("Error finding user: {}", e)))?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        let already_admin: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM admins WHERE email = $1)")
                .bind(&user.email)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| AppError::Database(format!("Error checking admin email: {}", e)))?;

        if already_admin.0 {
            return Err(AppError::Conflict(
                "El usuario ya es administrador".to_string(),
            ));
        }

        let admin = sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins (id, name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_admin_write_error)?;

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(map_admin_write_error)?;

        tx.commit()
            .await
            .map_err(|e| AppError::Database(format!("Error committing promotion: {}", e)))?;

        Ok(admin)
    }
}

/// Traducir los códigos de error de escritura a errores de dominio
fn map_admin_write_error(e: sqlx::Error) -> AppError {
    if let Some(db_err) = e.as_database_error() {
        match db_err.code().as_deref() {
            Some(UNIQUE_VIOLATION) => {
                return AppError::Conflict(
                    "Ya existe un administrador con ese email".to_string(),
                )
            }
            Some(FOREIGN_KEY_VIOLATION) => {
                return AppError::BadRequest("Referencia inválida".to_string())
            }
            _ => {}
        }
    }
    AppError::Database(format!("Error writing admin: {}", e))
}
