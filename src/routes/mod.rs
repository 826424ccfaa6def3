//! Routers de la API
//!
//! Cada recurso expone su propio router; aquí se componen todos bajo
//! /api junto con el health check.

pub mod admin_routes;
pub mod auth_routes;
pub mod booking_routes;
pub mod payment_routes;
pub mod user_routes;
pub mod vehicle_routes;
pub mod wishlist_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::state::AppState;

/// Componer el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", auth_routes::create_auth_router(state.clone()))
        .nest("/api/vehicle", vehicle_routes::create_vehicle_router(state.clone()))
        .nest("/api/booking", booking_routes::create_booking_router(state.clone()))
        .nest("/api/user", user_routes::create_user_router(state.clone()))
        .nest("/api/admin", admin_routes::create_admin_router(state.clone()))
        .nest("/api/wishlist", wishlist_routes::create_wishlist_router(state.clone()))
        .nest("/api/payment", payment_routes::create_payment_router(state.clone()))
        .with_state(state)
}

/// Health check simple
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "vehicle-rental",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
