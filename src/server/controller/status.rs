use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, status::DeviceStatusDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::status::DeviceStatus,
        service::status::{bridge::StatusOutcome, StatusService},
        state::AppState,
    },
};

pub static STATUS_TAG: &str = "status";

#[derive(Deserialize, IntoParams)]
pub struct StatusQuery {
    /// Id of the car whose device should report its status.
    #[serde(alias = "resource_id")]
    pub car_id: i32,
}

/// Asks the device in a car for its status and waits for the reply.
#[utoipa::path(
    get,
    path = "/status",
    tag = STATUS_TAG,
    params(StatusQuery),
    responses(
        (status = 200, description = "Status reported by the device", body = DeviceStatusDto),
        (status = 400, description = "Car does not exist", body = ErrorDto),
        (status = 401, description = "Not logged in or not the owner of the car", body = ErrorDto),
        (status = 408, description = "Device did not reply in time", body = ErrorDto),
        (status = 409, description = "A status request for this car is already in progress", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_status(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<StatusQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CarOwner(query.car_id)])
        .await?;

    let outcome = StatusService::new(&state.db, &state.status_bridge)
        .request_status(query.car_id)
        .await?;

    match outcome {
        StatusOutcome::Resolved(status) => {
            Ok((StatusCode::OK, Json(status.into_dto())).into_response())
        }
        StatusOutcome::TimedOut => Ok((
            StatusCode::REQUEST_TIMEOUT,
            Json(ErrorDto {
                error: "Device did not respond in time".to_string(),
            }),
        )
            .into_response()),
    }
}

/// Receives the status reported by the device in a car.
///
/// Answers 201 whether or not a request was waiting for it.
#[utoipa::path(
    post,
    path = "/status",
    tag = STATUS_TAG,
    request_body = DeviceStatusDto,
    responses(
        (status = 201, description = "Status accepted"),
        (status = 400, description = "Car does not exist", body = ErrorDto),
        (status = 401, description = "Not logged in or not the owner of the car", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_status(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<DeviceStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CarOwner(payload.car_id)])
        .await?;

    StatusService::new(&state.db, &state.status_bridge)
        .submit_status(DeviceStatus::from_dto(payload));

    Ok(StatusCode::CREATED)
}
