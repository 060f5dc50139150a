use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{api::ErrorDto, status::DeviceStatusDto, user::UserDto},
    server::{
        controller::{auth, status, token},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Car Security API"),
    paths(
        auth::login,
        auth::callback,
        auth::logout,
        auth::get_user,
        status::get_status,
        status::create_status,
        token::save_token,
    ),
    components(schemas(DeviceStatusDto, ErrorDto, UserDto)),
    tags(
        (name = "auth", description = "Owner login"),
        (name = "status", description = "Live status of the device installed in a car"),
        (name = "token", description = "Device push token registration"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", get(auth::login))
        .route("/auth/callback", get(auth::callback))
        .route("/auth/logout", get(auth::logout))
        .route("/auth/user", get(auth::get_user))
        .route("/status", get(status::get_status).post(status::create_status))
        .route("/token", post(token::save_token))
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();

        for path in ["/auth/login", "/auth/callback", "/auth/logout", "/auth/user", "/status", "/token"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
