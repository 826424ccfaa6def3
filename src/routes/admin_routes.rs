use axum::{
    extract::{Path, State},
    middleware,
    routing::{delete, get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::admin_controller::AdminController;
use crate::dto::admin_dto::{AdminResponse, CreateAdminRequest, PromoteUserRequest};
use crate::dto::auth_dto::ApiResponse;
use crate::dto::user_dto::{UserResponse, VerifyLicenseRequest};
use crate::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_admin_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/promote", post(promote_user))
        .route("/users", get(list_users))
        .route("/users/:id", delete(delete_user))
        .route("/admins", get(list_admins))
        .route("/admins", post(create_admin))
        .route("/license/verify", post(verify_license))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn promote_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<PromoteUserRequest>,
) -> Result<Json<ApiResponse<AdminResponse>>, AppError> {
    let controller = AdminController::new(state.pool.clone());
    let response = controller.promote_user(&user, request).await?;
    Ok(Json(response))
}

async fn list_users(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let controller = AdminController::new(state.pool.clone());
    let response = controller.list_users(&user).await?;
    Ok(Json(response))
}

async fn delete_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = AdminController::new(state.pool.clone());
    controller.delete_user(&user, id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Usuario eliminado exitosamente"
    })))
}

async fn list_admins(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<AdminResponse>>, AppError> {
    let controller = AdminController::new(state.pool.clone());
    let response = controller.list_admins(&user).await?;
    Ok(Json(response))
}

async fn create_admin(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateAdminRequest>,
) -> Result<Json<ApiResponse<AdminResponse>>, AppError> {
    let controller = AdminController::new(state.pool.clone());
    let response = controller.create_admin(&user, request).await?;
    Ok(Json(response))
}

async fn verify_license(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<VerifyLicenseRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = AdminController::new(state.pool.clone());
    let response = controller.verify_license(&user, request).await?;
    Ok(Json(response))
}
