use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user is logged in on this session.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session refers to a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(String),

    /// The car addressed by the request does not exist.
    ///
    /// Checked before ownership so an unknown car is reported as a bad request.
    #[error("Car {0} does not exist")]
    CarNotFound(i32),

    /// The user is logged in but lacks the required permission.
    ///
    /// # Fields
    /// - Username of the user
    /// - Description of the denied operation, logged only
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(String, String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// No CSRF state was stored in the session for this callback.
    #[error("Failed to login user due to missing CSRF state in session")]
    CsrfMissingValue,

    /// Exchanging the authorization code for an access token failed.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),

    /// The authorization server's user info endpoint returned an unusable answer.
    #[error("Failed to fetch user info: {0}")]
    UserInfo(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` / `AccessDenied` → 401 Unauthorized
/// - `CarNotFound` → 400 Bad Request with "Car does not exist"
/// - `CsrfValidationFailed` / `CsrfMissingValue` → 400 Bad Request
/// - `TokenExchange` / `UserInfo` → 500 Internal Server Error
///
/// All errors are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) | Self::AccessDenied(_, _) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not logged in or not the owner of this car".to_string(),
                }),
            )
                .into_response(),
            Self::CarNotFound(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Car does not exist".to_string(),
                }),
            )
                .into_response(),
            Self::CsrfValidationFailed | Self::CsrfMissingValue => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::TokenExchange(_) | Self::UserInfo(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDto {
                    error: "Internal server error".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
