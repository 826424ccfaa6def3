//! Middleware de autenticación JWT
//!
//! Resuelve la identidad del llamante: extrae el token (cookie `token` o
//! header Authorization), lo verifica, y vuelve a buscar al sujeto en la
//! tabla que corresponda a su rol. Un token válido cuyo sujeto ya no
//! existe se rechaza en lugar de producir una identidad obsoleta.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{
    models::auth::Role,
    state::AppState,
    utils::errors::AppError,
    utils::jwt::{extract_token_from_cookie, extract_token_from_header, verify_token},
};

/// Identidad resuelta que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Extraer token: cookie primero, header Authorization como fallback
    let token = request
        .headers()
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(extract_token_from_cookie)
        .or_else(|| {
            request
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| extract_token_from_header(value).ok())
        })
        .map(|token| token.to_string())
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    let claims = verify_token(&token, &state.jwt_config())?;

    let id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("ID de usuario inválido".to_string()))?;

    // Verificar que el sujeto sigue existiendo en la tabla de su rol
    let row: Option<(String, String)> = match claims.role {
        Role::User => sqlx::query_as("SELECT name, email FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&state.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error resolving identity: {}", e)))?,
        Role::Admin => sqlx::query_as("SELECT name, email FROM admins WHERE id = $1")
            .bind(id)
            .fetch_optional(&state.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error resolving identity: {}", e)))?,
    };

    let (name, email) =
        row.ok_or_else(|| AppError::Unauthorized("Usuario no encontrado".to_string()))?;

    let authenticated_user = AuthenticatedUser {
        id,
        email,
        name,
        role: claims.role,
    };

    // Inyectar la identidad resuelta en las extensions
    request.extensions_mut().insert(authenticated_user);

    Ok(next.run(request).await)
}
