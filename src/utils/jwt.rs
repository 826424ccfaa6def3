//! Utilidades JWT
//!
//! Este módulo contiene funciones helper para emitir y verificar los
//! tokens de sesión de usuarios y administradores.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    config::environment::EnvironmentConfig,
    models::auth::Role,
    utils::errors::AppError,
};

/// Claims del JWT token
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,  // user/admin id
    pub email: String,
    pub name: String,
    pub role: Role,
    pub exp: usize,   // expiration timestamp
    pub iat: usize,   // issued at timestamp
}

/// Configuración de JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration: u64,
}

impl From<&EnvironmentConfig> for JwtConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            expiration: config.jwt_expiration,
        }
    }
}

/// Generar JWT token para una identidad resuelta
pub fn generate_token(
    id: Uuid,
    email: &str,
    name: &str,
    role: Role,
    config: &JwtConfig,
) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(config.expiration as i64);

    let claims = JwtClaims {
        sub: id.to_string(),
        email: email.to_string(),
        name: name.to_string(),
        role,
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(config.secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Jwt(format!("Error generando token: {}", e)))
}

/// Verificar y decodificar JWT token
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<JwtClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

    let token_data = decode::<JwtClaims>(
        token,
        &decoding_key,
        &Validation::default(),
    )
    .map_err(|e| AppError::Jwt(format!("Token inválido: {}", e)))?;

    Ok(token_data.claims)
}

/// Extraer token del header Authorization
pub fn extract_token_from_header(auth_header: &str) -> Result<&str, AppError> {
    if !auth_header.starts_with("Bearer ") {
        return Err(AppError::Jwt("Header Authorization debe comenzar con 'Bearer '".to_string()));
    }

    let token = &auth_header[7..];
    if token.is_empty() {
        return Err(AppError::Jwt("Token no puede estar vacío".to_string()));
    }

    Ok(token)
}

/// Extraer el token de sesión del header Cookie (cookie `token`)
pub fn extract_token_from_cookie(cookie_header: &str) -> Option<&str> {
    cookie_header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == "token" && !value.is_empty() {
            Some(value)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            expiration: 86400,
        }
    }

    #[test]
    fn test_token_round_trip() {
        let config = test_config();
        let id = Uuid::new_v4();

        let token = generate_token(id, "ana@example.com", "Ana", Role::User, &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, id.to_string());
        assert_eq!(claims.email, "ana@example.com");
        assert_eq!(claims.name, "Ana");
        assert_eq!(claims.role, Role::User);
    }

    #[test]
    fn test_admin_role_preserved() {
        let config = test_config();
        let token =
            generate_token(Uuid::new_v4(), "root@example.com", "Root", Role::Admin, &config)
                .unwrap();
        let claims = verify_token(&token, &config).unwrap();
        assert_eq!(claims.role, Role::Admin);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let config = test_config();
        let token =
            generate_token(Uuid::new_v4(), "ana@example.com", "Ana", Role::User, &config).unwrap();

        let other = JwtConfig {
            secret: "another-secret".to_string(),
            expiration: 86400,
        };
        assert!(verify_token(&token, &other).is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let config = test_config();
        let token =
            generate_token(Uuid::new_v4(), "ana@example.com", "Ana", Role::User, &config).unwrap();
        let tampered = format!("{}x", token);
        assert!(verify_token(&tampered, &config).is_err());
    }

    #[test]
    fn test_extract_token_from_header() {
        assert_eq!(extract_token_from_header("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(extract_token_from_header("abc.def.ghi").is_err());
        assert!(extract_token_from_header("Bearer ").is_err());
    }

    #[test]
    fn test_extract_token_from_cookie() {
        assert_eq!(extract_token_from_cookie("token=abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(
            extract_token_from_cookie("theme=dark; token=abc.def.ghi; lang=es"),
            Some("abc.def.ghi")
        );
        assert_eq!(extract_token_from_cookie("theme=dark"), None);
        assert_eq!(extract_token_from_cookie("token="), None);
    }
}
