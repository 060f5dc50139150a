//! Firebase Cloud Messaging HTTP v1 dispatcher.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Serialize;

use super::{PushDispatcher, PushError, PushMessage};

/// Request body of `projects.messages.send`.
#[derive(Serialize)]
struct SendRequest<'a> {
    message: FcmMessage<'a>,
}

#[derive(Serialize)]
struct FcmMessage<'a> {
    token: &'a str,
    data: &'a BTreeMap<String, String>,
}

/// Sends data messages through Firebase Cloud Messaging.
///
/// Authenticates with a pre-issued OAuth2 access token for the Firebase project's
/// service account.
pub struct FcmDispatcher {
    http_client: reqwest::Client,
    send_url: String,
    access_token: String,
}

impl FcmDispatcher {
    /// Creates a new dispatcher.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `endpoint` - FCM base URL, normally `https://fcm.googleapis.com`
    /// - `project_id` - Firebase project id
    /// - `access_token` - OAuth2 bearer token authorized for the project
    pub fn new(
        http_client: reqwest::Client,
        endpoint: &str,
        project_id: &str,
        access_token: String,
    ) -> Self {
        Self {
            http_client,
            send_url: format!(
                "{}/v1/projects/{}/messages:send",
                endpoint.trim_end_matches('/'),
                project_id
            ),
            access_token,
        }
    }

    /// Full URL messages are posted to.
    pub fn send_url(&self) -> &str {
        &self.send_url
    }
}

#[async_trait]
impl PushDispatcher for FcmDispatcher {
    async fn send(&self, message: PushMessage) -> Result<(), PushError> {
        if message.token.trim().is_empty() {
            return Err(PushError::MissingToken);
        }

        let body = SendRequest {
            message: FcmMessage {
                token: &message.token,
                data: &message.data,
            },
        };

        let response = self
            .http_client
            .post(&self.send_url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PushError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!("Successfully sent push message: {}", status);

        Ok(())
    }
}
