use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    state::OAuth2Client,
};

/// Claims returned by the authorization server's user info endpoint.
#[derive(Debug, Deserialize)]
pub struct UserInfo {
    /// Stable subject identifier, used as username when no preferred one is given.
    pub sub: String,
    pub preferred_username: Option<String>,
    pub name: Option<String>,
}

impl UserInfo {
    /// Maps the claims onto the user record stored locally.
    pub fn into_upsert_param(self) -> Result<UpsertUserParam, AuthError> {
        let username = self
            .preferred_username
            .filter(|username| !username.trim().is_empty())
            .unwrap_or(self.sub);

        if username.trim().is_empty() {
            return Err(AuthError::UserInfo(
                "authorization server returned no username".to_string(),
            ));
        }

        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| username.clone());

        Ok(UpsertUserParam { username, name })
    }
}

/// Service for the OAuth2 authorization code login.
///
/// Owners of cars log in through an external authorization server; the local user record
/// is created or refreshed on every successful callback.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    /// Endpoint returning the logged-in user's claims for a bearer token.
    pub userinfo_url: &'a str,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        userinfo_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url,
        }
    }

    /// Generates the authorization server login URL with CSRF protection.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Tuple containing the authorization URL and CSRF state token
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .url();

        (authorize_url, csrf_state)
    }

    /// Handles the OAuth2 callback and authenticates the user.
    ///
    /// Exchanges the authorization code for an access token, fetches the user's claims and
    /// creates or updates the local user record.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user
    /// - `Err(AuthError::TokenExchange)` - Code exchange failed
    /// - `Err(AppError::ReqwestErr)` - User info request failed
    /// - `Err(AppError::DbErr)` - Database error during user upsert
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let user_info = self.fetch_user_info(&token).await?;
        let user = user_repo.upsert(user_info.into_upsert_param()?).await?;

        tracing::info!("User {} logged in", user.username);

        Ok(user)
    }

    async fn fetch_user_info(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<UserInfo, AppError> {
        let access_token = token.access_token().secret();

        let response = self
            .http_client
            .get(self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AuthError::UserInfo(format!(
                "user info endpoint answered {}",
                response.status()
            ))
            .into());
        }

        let user_info = response.json::<UserInfo>().await?;

        Ok(user_info)
    }
}
