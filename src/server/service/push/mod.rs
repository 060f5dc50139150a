//! Outbound push commands to the device installed in a car.
//!
//! Delivery is fire-and-forget: a successful `send` only means the push provider accepted
//! the message, not that the device received it. Callers treat every failure as
//! non-fatal.

pub mod fcm;

use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;

pub use fcm::FcmDispatcher;

/// Data key carrying the command name.
const COMMAND_KEY: &str = "command";
/// Data key carrying the username of the car owner who issued the command.
const USERNAME_KEY: &str = "username";
/// Command asking the device to report its current status.
pub const STATUS_COMMAND: &str = "Status";

/// Errors returned by a push dispatcher.
#[derive(Error, Debug)]
pub enum PushError {
    /// The car has no registered device token to address.
    #[error("Device push token is empty")]
    MissingToken,

    /// Push notifications are not configured on this server.
    #[error("Push notifications are not configured")]
    Disabled,

    /// The push provider could not be reached.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The push provider answered with a non-success status.
    #[error("Push provider rejected message with status {status}: {body}")]
    Rejected {
        /// HTTP status returned by the provider
        status: u16,
        /// Response body returned by the provider
        body: String,
    },
}

/// Data message addressed to one device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushMessage {
    /// Device registration token.
    pub token: String,
    /// Key/value data delivered to the device app.
    pub data: BTreeMap<String, String>,
}

impl PushMessage {
    /// Builds the command asking a car's device to report its status.
    ///
    /// # Arguments
    /// - `token` - Device registration token stored on the car
    /// - `username` - Owner of the car requesting the status
    pub fn status_command(token: impl Into<String>, username: impl Into<String>) -> Self {
        let mut data = BTreeMap::new();
        data.insert(COMMAND_KEY.to_string(), STATUS_COMMAND.to_string());
        data.insert(USERNAME_KEY.to_string(), username.into());

        Self {
            token: token.into(),
            data,
        }
    }
}

/// Sends push messages to devices.
#[async_trait]
pub trait PushDispatcher: Send + Sync {
    async fn send(&self, message: PushMessage) -> Result<(), PushError>;
}

/// Dispatcher used when no push provider is configured; every send fails.
pub struct DisabledDispatcher;

#[async_trait]
impl PushDispatcher for DisabledDispatcher {
    async fn send(&self, _message: PushMessage) -> Result<(), PushError> {
        Err(PushError::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_command_carries_command_and_owner() {
        let message = PushMessage::status_command("device-token", "tomas");

        assert_eq!(message.token, "device-token");
        assert_eq!(message.data.get("command").map(String::as_str), Some("Status"));
        assert_eq!(message.data.get("username").map(String::as_str), Some("tomas"));
    }

    #[tokio::test]
    async fn disabled_dispatcher_always_fails() {
        let result = DisabledDispatcher
            .send(PushMessage::status_command("t", "u"))
            .await;

        assert!(matches!(result, Err(PushError::Disabled)));
    }
}
