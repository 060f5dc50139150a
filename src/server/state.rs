//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - HTTP client for external API requests
//! - OAuth2 client for owner login
//! - Status bridge pairing status requests with device replies

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use super::service::status::CarStatusBridge;

/// Type alias for the OAuth2 client with authorization and token endpoints set.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `CarStatusBridge` shares its correlation table through an `Arc`
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// HTTP client for outbound requests, configured without redirects.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    /// Endpoint returning the claims of a logged-in user.
    pub userinfo_url: String,

    /// Single bridge instance shared by `GET /status` and `POST /status`.
    pub status_bridge: CarStatusBridge,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        userinfo_url: String,
        status_bridge: CarStatusBridge,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url,
            status_bridge,
        }
    }
}
