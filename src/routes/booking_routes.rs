use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{get, patch, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::booking_controller::BookingController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::booking_dto::{
    AdminBookingResponse, BookingResponse, CreateBookingRequest, MyBookingResponse,
    UpdateBookingStatusRequest,
};
use crate::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_booking))
        .route("/", get(list_all_bookings))
        .route("/mine", get(list_my_bookings))
        .route("/:id/status", patch(update_booking_status))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn create_booking(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BookingResponse>>), AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.create(&user, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_my_bookings(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<MyBookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.list_mine(&user).await?;
    Ok(Json(response))
}

async fn list_all_bookings(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<AdminBookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.list_all(&user).await?;
    Ok(Json(response))
}

async fn update_booking_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBookingStatusRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.update_status(&user, id, request.status).await?;
    Ok(Json(response))
}
