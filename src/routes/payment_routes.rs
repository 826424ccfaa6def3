use axum::{extract::State, middleware, routing::post, Extension, Json, Router};

use crate::controllers::payment_controller::PaymentController;
use crate::dto::payment_dto::{EsewaPaymentRequest, PaymentResponse};
use crate::middleware::auth::{auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_payment_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/esewa", post(submit_esewa))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn submit_esewa(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<EsewaPaymentRequest>,
) -> Result<Json<PaymentResponse>, AppError> {
    let controller = PaymentController::new(state.pool.clone());
    let response = controller.submit_esewa(&user, request).await?;
    Ok(Json(response))
}
