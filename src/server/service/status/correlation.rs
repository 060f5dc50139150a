//! Rendezvous table correlating pending status requests with device replies.
//!
//! A request registers a [`Waiter`] under the resource id before it dispatches anything to
//! the device. The device's reply arrives on an unrelated request and is handed over with
//! [`CorrelationTable::deliver`], which wakes the waiter through a oneshot channel. Because
//! the channel is created and inserted into the table inside `register`, a reply can never
//! arrive before someone is listening for it.
//!
//! All table access goes through a single `std::sync::Mutex`. The lock is never held across
//! an `.await` and no I/O happens while it is held; every operation is a single hash map
//! lookup.

use std::{
    collections::{hash_map::Entry, HashMap},
    hash::Hash,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, MutexGuard, PoisonError,
    },
    time::Duration,
};

use thiserror::Error;
use tokio::sync::oneshot;

/// Failure to register a waiter.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterError {
    /// Another request for the same resource is still in flight.
    ///
    /// Only one waiter may be registered per resource id. The second caller is rejected
    /// immediately rather than replacing the first caller's wake channel.
    #[error("A status request for this resource is already in progress")]
    Conflict,
}

/// Result of waiting on a [`Waiter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome<P> {
    /// The reply delivered for this waiter's resource id.
    Delivered(P),
    /// No reply arrived before the timeout elapsed.
    TimedOut,
    /// The entry was evicted with [`CorrelationTable::remove`] while still pending.
    Evicted,
}

struct Slot<P> {
    /// Identifies the registration owning this slot.
    ticket: u64,
    /// Taken by the first successful delivery.
    sender: Option<oneshot::Sender<P>>,
}

/// Table of pending waiters keyed by resource id.
///
/// Constructed explicitly and shared through an `Arc`; there is no process-wide instance.
pub struct CorrelationTable<K, P> {
    slots: Mutex<HashMap<K, Slot<P>>>,
    next_ticket: AtomicU64,
}

impl<K, P> CorrelationTable<K, P>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            next_ticket: AtomicU64::new(1),
        }
    }

    /// Registers a waiter for `id`.
    ///
    /// The waiter's wake channel is in the table when this returns, so any delivery from
    /// this point on reaches it, even one that happens before `await_result` is polled.
    ///
    /// # Returns
    /// - `Ok(Waiter)` - Handle to await the reply on
    /// - `Err(RegisterError::Conflict)` - A waiter for `id` is already registered
    pub fn register(self: &Arc<Self>, id: K) -> Result<Waiter<K, P>, RegisterError> {
        let (sender, receiver) = oneshot::channel();
        let ticket = self.next_ticket.fetch_add(1, Ordering::Relaxed);

        match self.slots().entry(id.clone()) {
            Entry::Occupied(_) => return Err(RegisterError::Conflict),
            Entry::Vacant(vacant) => {
                vacant.insert(Slot {
                    ticket,
                    sender: Some(sender),
                });
            }
        }

        Ok(Waiter {
            id,
            ticket,
            receiver,
            table: Arc::clone(self),
        })
    }

    /// Hands `payload` to the waiter registered for `id` and wakes it.
    ///
    /// Delivery is at most once and not durable: when nobody is waiting, or the waiter
    /// already received a payload or gave up, the payload is dropped and nothing is retained.
    ///
    /// # Returns
    /// - `true` - The registered waiter received the payload
    /// - `false` - No waiter could take it; the payload was dropped
    pub fn deliver(&self, id: &K, payload: P) -> bool {
        let mut slots = self.slots();

        // Sending under the lock means a waiter that has released its slot can rely on
        // its channel being final.
        match slots.get_mut(id).and_then(|slot| slot.sender.take()) {
            Some(sender) => sender.send(payload).is_ok(),
            None => false,
        }
    }

    /// Evicts whatever is registered for `id`.
    ///
    /// Idempotent. A pending waiter for `id` wakes with [`WaitOutcome::Evicted`].
    ///
    /// # Returns
    /// - `true` - An entry was removed
    /// - `false` - Nothing was registered for `id`
    pub fn remove(&self, id: &K) -> bool {
        self.slots().remove(id).is_some()
    }

    /// Returns whether a waiter is currently registered for `id`.
    pub fn contains(&self, id: &K) -> bool {
        self.slots().contains_key(id)
    }

    /// Number of registered waiters.
    pub fn len(&self) -> usize {
        self.slots().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots().is_empty()
    }

    /// Removes the entry for `id` only if it still belongs to `ticket`.
    ///
    /// A successor registration for the same id carries a different ticket and is left alone.
    fn release(&self, id: &K, ticket: u64) {
        let mut slots = self.slots();
        if slots.get(id).is_some_and(|slot| slot.ticket == ticket) {
            slots.remove(id);
        }
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<K, Slot<P>>> {
        // No code path panics while holding the lock, so a poisoned map is still consistent.
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K, P> Default for CorrelationTable<K, P>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Handle held by the request waiting for a reply.
///
/// Dropping the handle releases its table entry, so an abandoned request (for example a
/// client that disconnected mid-wait) never leaves an orphan behind.
pub struct Waiter<K, P>
where
    K: Eq + Hash + Clone,
{
    id: K,
    ticket: u64,
    receiver: oneshot::Receiver<P>,
    table: Arc<CorrelationTable<K, P>>,
}

impl<K, P> Waiter<K, P>
where
    K: Eq + Hash + Clone,
{
    /// Waits up to `timeout` for the reply.
    ///
    /// Consumes the waiter; its table entry is gone by the time this returns.
    /// [`WaitOutcome::TimedOut`] is never returned before `timeout` has elapsed.
    pub async fn await_result(mut self, timeout: Duration) -> WaitOutcome<P> {
        match tokio::time::timeout(timeout, &mut self.receiver).await {
            Ok(Ok(payload)) => WaitOutcome::Delivered(payload),
            Ok(Err(_)) => WaitOutcome::Evicted,
            Err(_) => {
                // Once the slot is gone no new delivery can start, and one that already
                // happened has left its payload in the channel.
                self.table.release(&self.id, self.ticket);
                match self.receiver.try_recv() {
                    Ok(payload) => WaitOutcome::Delivered(payload),
                    Err(_) => WaitOutcome::TimedOut,
                }
            }
        }
    }
}

impl<K, P> Drop for Waiter<K, P>
where
    K: Eq + Hash + Clone,
{
    fn drop(&mut self) {
        self.table.release(&self.id, self.ticket);
    }
}
