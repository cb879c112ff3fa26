//! Store change notifications.
//!
//! All stores in a session share one broadcast channel. The view layer
//! subscribes and re-reads whatever a received event invalidates. Sending
//! never blocks; if nobody is subscribed the event is dropped.

use tokio::sync::broadcast;

use emerald_table_core::{OrderId, TableId};

/// Capacity of the session event channel. Mutations are user-paced, so a
/// small buffer is plenty; lagging subscribers skip ahead.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// A change in one of the session stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// Cart lines changed (add, update, remove, or clear).
    CartChanged,
    /// An order was recorded at checkout.
    OrderPlaced(OrderId),
    /// The favorites set changed.
    FavoritesChanged,
    /// The session's table identity was set.
    TableAssigned(TableId),
}

/// Shared sender handle for session store events.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: broadcast::Sender<StoreEvent>,
}

impl EventSender {
    /// Create a new event channel.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Subscribe to store events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }

    /// Broadcast an event to all subscribers.
    ///
    /// A send with zero receivers is not an error; the event is dropped.
    pub fn emit(&self, event: StoreEvent) {
        tracing::trace!(?event, "store event");
        let _ = self.tx.send(event);
    }
}

impl Default for EventSender {
    fn default() -> Self {
        Self::new()
    }
}
