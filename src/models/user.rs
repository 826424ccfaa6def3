//! Modelo de User
//!
//! Mapea exactamente a la tabla users. El estado de licencia en NULL
//! significa que el usuario todavía no ha subido su carnet ("unset").

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de verificación del carnet de conducir
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "license_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LicenseStatus {
    Pending,
    Approved,
    Rejected,
}

impl LicenseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseStatus::Pending => "pending",
            LicenseStatus::Approved => "approved",
            LicenseStatus::Rejected => "rejected",
        }
    }
}

/// Etiqueta del estado de licencia para la API ("unset" si no hay envío)
pub fn license_status_label(status: Option<LicenseStatus>) -> &'static str {
    match status {
        Some(s) => s.as_str(),
        None => "unset",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub profile_image_url: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub license_card_url: Option<String>,
    pub license_status: Option<LicenseStatus>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_status_label() {
        assert_eq!(license_status_label(None), "unset");
        assert_eq!(license_status_label(Some(LicenseStatus::Pending)), "pending");
        assert_eq!(license_status_label(Some(LicenseStatus::Approved)), "approved");
        assert_eq!(license_status_label(Some(LicenseStatus::Rejected)), "rejected");
    }

    #[test]
    fn test_license_status_serde() {
        assert_eq!(serde_json::to_string(&LicenseStatus::Approved).unwrap(), "\"approved\"");
        assert!(serde_json::from_str::<LicenseStatus>("\"unset\"").is_err());
    }
}
