//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the keys of one
//! concern:
//! - `AuthSession` - Username of the logged-in user
//! - `CsrfSession` - CSRF state of a pending OAuth login

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USERNAME: &str = "auth:username";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the username of the user who just logged in.
    ///
    /// # Returns
    /// - `Ok(())` - Username successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_username(&self, username: &str) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_USERNAME, username.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the username of the logged-in user.
    ///
    /// # Returns
    /// - `Ok(Some(username))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_username(&self) -> Result<Option<String>, AppError> {
        let username = self.session.get::<String>(SESSION_AUTH_USERNAME).await?;
        Ok(username)
    }

    /// Clears all data from the session.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection session management.
///
/// The token is stored when the login redirect is issued and consumed by the callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token so each token is usable once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
