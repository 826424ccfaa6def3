use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::user::{license_status_label, User};

// Request para actualizar el perfil (campos parciales)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,

    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub profile_image_url: Option<String>,
}

// Request del usuario para subir o reemplazar su carnet
#[derive(Debug, Deserialize)]
pub struct SubmitLicenseRequest {
    pub license_card_url: String,
}

// Request del admin para aprobar/rechazar una licencia
#[derive(Debug, Deserialize)]
pub struct VerifyLicenseRequest {
    pub user_id: Uuid,
    // solo se admite "approved" o "rejected"
    pub status: String,
}

// Response de usuario (sin password_hash)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub profile_image_url: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub license_card_url: Option<String>,
    pub license_status: &'static str,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            profile_image_url: user.profile_image_url,
            phone_number: user.phone_number,
            address: user.address,
            license_card_url: user.license_card_url,
            license_status: license_status_label(user.license_status),
            created_at: user.created_at,
        }
    }
}
