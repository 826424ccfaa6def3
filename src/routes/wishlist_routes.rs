use axum::{
    extract::{Path, State},
    middleware,
    routing::{delete, get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::wishlist_controller::WishlistController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::vehicle_dto::VehicleResponse;
use crate::dto::wishlist_dto::AddWishlistRequest;
use crate::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_wishlist_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_wishlist))
        .route("/", post(add_to_wishlist))
        .route("/:vehicle_id", delete(remove_from_wishlist))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn add_to_wishlist(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<AddWishlistRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = WishlistController::new(state.pool.clone());
    let response = controller.add(&user, request.vehicle_id).await?;
    Ok(Json(response))
}

async fn remove_from_wishlist(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(vehicle_id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = WishlistController::new(state.pool.clone());
    let response = controller.remove(&user, vehicle_id).await?;
    Ok(Json(response))
}

async fn list_wishlist(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = WishlistController::new(state.pool.clone());
    let response = controller.list(&user).await?;
    Ok(Json(response))
}
