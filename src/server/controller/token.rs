use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::api::ErrorDto,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::car::CarService,
        state::AppState,
    },
};

pub static TOKEN_TAG: &str = "token";

#[derive(Deserialize, IntoParams)]
pub struct TokenQuery {
    pub car_id: i32,
    /// Push registration token of the device installed in the car.
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/token",
    tag = TOKEN_TAG,
    params(TokenQuery),
    responses(
        (status = 201, description = "Device token stored"),
        (status = 400, description = "Empty token or car does not exist", body = ErrorDto),
        (status = 401, description = "Not logged in or not the owner of the car", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_token(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<TokenQuery>,
) -> Result<impl IntoResponse, AppError> {
    if query.token.trim().is_empty() {
        return Err(AppError::BadRequest("Empty token".to_string()));
    }

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CarOwner(query.car_id)])
        .await?;

    CarService::new(&state.db)
        .register_device_token(query.car_id, query.token)
        .await?;

    Ok(StatusCode::CREATED)
}
