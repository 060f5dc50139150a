use std::time::Duration;

use crate::server::error::config::ConfigError;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_STATUS_TIMEOUT_SECONDS: u64 = 15;
const DEFAULT_FCM_ENDPOINT: &str = "https://fcm.googleapis.com";

/// Credentials for pushing commands through Firebase Cloud Messaging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FcmConfig {
    pub project_id: String,
    pub access_token: String,
    pub endpoint: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub oauth_client_id: String,
    pub oauth_client_secret: String,
    pub oauth_redirect_url: String,

    pub oauth_auth_url: String,
    pub oauth_token_url: String,
    pub oauth_userinfo_url: String,

    /// How long a status request waits for the device's reply.
    pub status_timeout: Duration,

    /// `None` when push notifications are not configured.
    pub fcm: Option<FcmConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &str| {
            optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let status_timeout = match optional("STATUS_TIMEOUT_SECONDS") {
            Some(value) => parse_timeout("STATUS_TIMEOUT_SECONDS", &value)?,
            None => Duration::from_secs(DEFAULT_STATUS_TIMEOUT_SECONDS),
        };

        let fcm = match (optional("FCM_PROJECT_ID"), optional("FCM_ACCESS_TOKEN")) {
            (Some(project_id), Some(access_token)) => Some(FcmConfig {
                project_id,
                access_token,
                endpoint: optional("FCM_ENDPOINT")
                    .unwrap_or_else(|| DEFAULT_FCM_ENDPOINT.to_string()),
            }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::MissingEnvVar("FCM_ACCESS_TOKEN".to_string()))
            }
            (None, Some(_)) => {
                return Err(ConfigError::MissingEnvVar("FCM_PROJECT_ID".to_string()))
            }
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            oauth_client_id: required("OAUTH_CLIENT_ID")?,
            oauth_client_secret: required("OAUTH_CLIENT_SECRET")?,
            oauth_redirect_url: required("OAUTH_REDIRECT_URL")?,
            oauth_auth_url: required("OAUTH_AUTH_URL")?,
            oauth_token_url: required("OAUTH_TOKEN_URL")?,
            oauth_userinfo_url: required("OAUTH_USERINFO_URL")?,
            status_timeout,
            fcm,
        })
    }
}

fn parse_timeout(name: &str, value: &str) -> Result<Duration, ConfigError> {
    let seconds = value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

    if seconds == 0 {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: "must be at least 1 second".to_string(),
        });
    }

    Ok(Duration::from_secs(seconds))
}
