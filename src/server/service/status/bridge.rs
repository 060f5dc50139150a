//! Request/reply bridge between HTTP callers and remote devices.
//!
//! `request_status` registers a waiter, pushes a command to the device and suspends until
//! the device's reply is submitted through `submit_result` or the timeout expires.

use std::{fmt::Display, hash::Hash, sync::Arc, time::Duration};

use crate::server::service::push::{PushDispatcher, PushMessage};

use super::correlation::{CorrelationTable, RegisterError, WaitOutcome};

/// Terminal result of a status request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusOutcome<P> {
    /// The device replied in time.
    Resolved(P),
    /// The device did not reply in time. Retryable.
    TimedOut,
}

pub struct StatusBridge<K, P>
where
    K: Eq + Hash + Clone,
{
    table: Arc<CorrelationTable<K, P>>,
    dispatcher: Arc<dyn PushDispatcher>,
    timeout: Duration,
}

impl<K, P> Clone for StatusBridge<K, P>
where
    K: Eq + Hash + Clone,
{
    fn clone(&self) -> Self {
        Self {
            table: Arc::clone(&self.table),
            dispatcher: Arc::clone(&self.dispatcher),
            timeout: self.timeout,
        }
    }
}

impl<K, P> StatusBridge<K, P>
where
    K: Eq + Hash + Clone + Display + Send + Sync + 'static,
    P: Send + 'static,
{
    /// Creates a new bridge.
    ///
    /// # Arguments
    /// - `table` - Correlation table shared with every clone of this bridge
    /// - `dispatcher` - Push channel used to reach devices
    /// - `timeout` - Default time a request waits for the device's reply
    pub fn new(
        table: Arc<CorrelationTable<K, P>>,
        dispatcher: Arc<dyn PushDispatcher>,
        timeout: Duration,
    ) -> Self {
        Self {
            table,
            dispatcher,
            timeout,
        }
    }

    pub fn table(&self) -> &Arc<CorrelationTable<K, P>> {
        &self.table
    }

    /// Asks the device behind `id` for its status and waits for the reply.
    ///
    /// Uses the bridge's configured timeout. See [`Self::request_status_with_timeout`].
    pub async fn request_status(
        &self,
        id: K,
        message: PushMessage,
    ) -> Result<StatusOutcome<P>, RegisterError> {
        self.request_status_with_timeout(id, message, self.timeout)
            .await
    }

    /// Asks the device behind `id` for its status and waits up to `timeout` for the reply.
    ///
    /// The waiter is registered before the push is dispatched, so a device replying faster
    /// than this task resumes is still matched. Dispatch runs on its own task and its
    /// failures are only logged; the request then ends as [`StatusOutcome::TimedOut`].
    ///
    /// # Returns
    /// - `Ok(StatusOutcome::Resolved(_))` - The device replied in time
    /// - `Ok(StatusOutcome::TimedOut)` - No reply within `timeout`
    /// - `Err(RegisterError::Conflict)` - Another request for `id` is in flight
    pub async fn request_status_with_timeout(
        &self,
        id: K,
        message: PushMessage,
        timeout: Duration,
    ) -> Result<StatusOutcome<P>, RegisterError> {
        let waiter = self.table.register(id.clone())?;

        let dispatcher = Arc::clone(&self.dispatcher);
        let target = id.to_string();
        tokio::spawn(async move {
            if let Err(e) = dispatcher.send(message).await {
                tracing::warn!("Failed to dispatch status command to {}: {}", target, e);
            }
        });

        match waiter.await_result(timeout).await {
            WaitOutcome::Delivered(payload) => {
                tracing::debug!("Received status for {}", id);
                Ok(StatusOutcome::Resolved(payload))
            }
            WaitOutcome::TimedOut => {
                tracing::debug!("Status request for {} timed out after {:?}", id, timeout);
                Ok(StatusOutcome::TimedOut)
            }
            WaitOutcome::Evicted => {
                tracing::debug!("Status request for {} was evicted", id);
                Ok(StatusOutcome::TimedOut)
            }
        }
    }

    /// Hands a device's reply to the request waiting for `id`. Never blocks.
    ///
    /// # Returns
    /// - `true` - A waiting request received the payload
    /// - `false` - Nobody was waiting; the payload was dropped
    pub fn submit_result(&self, id: &K, payload: P) -> bool {
        let delivered = self.table.deliver(id, payload);
        if !delivered {
            tracing::debug!("Dropping status for {}: no request waiting", id);
        }
        delivered
    }
}
