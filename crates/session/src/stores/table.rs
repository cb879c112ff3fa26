//! Table identity for the session.
//!
//! The table id is configuration, not an evolving state machine: it is set
//! once when the diner sits down (QR scan, host assignment) and read by the
//! cart and order flows afterwards.

use std::sync::{Arc, Mutex, PoisonError};

use emerald_table_core::TableId;

use crate::stores::notify::{EventSender, StoreEvent};

/// Errors that can occur when assigning a table.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TableError {
    /// The session already has a table.
    #[error("table already assigned: {0}")]
    AlreadyAssigned(TableId),
}

/// Holds the single current table identifier.
#[derive(Debug, Clone)]
pub struct TableStore {
    table: Arc<Mutex<Option<TableId>>>,
    events: EventSender,
}

impl TableStore {
    /// Create an unassigned table store wired to the session event channel.
    #[must_use]
    pub fn new(events: EventSender) -> Self {
        Self {
            table: Arc::new(Mutex::new(None)),
            events,
        }
    }

    /// Assign the session's table.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::AlreadyAssigned`] if a table was already set;
    /// the existing assignment is kept.
    pub fn assign(&self, id: TableId) -> Result<(), TableError> {
        {
            let mut table = self.lock();
            if let Some(existing) = table.as_ref() {
                return Err(TableError::AlreadyAssigned(existing.clone()));
            }
            *table = Some(id.clone());
        }

        self.events.emit(StoreEvent::TableAssigned(id));
        Ok(())
    }

    /// The current table, if assigned.
    #[must_use]
    pub fn current(&self) -> Option<TableId> {
        self.lock().clone()
    }

    /// Whether a table has been assigned.
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<TableId>> {
        self.table.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_once() {
        let store = TableStore::new(EventSender::new());
        assert!(store.current().is_none());

        store.assign(TableId::new("t-12")).unwrap();
        assert_eq!(store.current(), Some(TableId::new("t-12")));
    }

    #[test]
    fn test_second_assignment_rejected() {
        let store = TableStore::new(EventSender::new());
        store.assign(TableId::new("t-12")).unwrap();

        let result = store.assign(TableId::new("t-99"));
        assert!(matches!(
            result,
            Err(TableError::AlreadyAssigned(id)) if id.as_str() == "t-12"
        ));
        // The original assignment wins
        assert_eq!(store.current(), Some(TableId::new("t-12")));
    }

    #[test]
    fn test_assignment_broadcasts() {
        let events = EventSender::new();
        let store = TableStore::new(events.clone());
        let mut rx = events.subscribe();

        store.assign(TableId::new("t-1")).unwrap();
        assert_eq!(
            rx.try_recv().unwrap(),
            StoreEvent::TableAssigned(TableId::new("t-1"))
        );
    }
}
