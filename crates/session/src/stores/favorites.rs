//! Favorited menu items.
//!
//! Plain set semantics: favoriting an already-favorited item is idempotent,
//! unfavoriting an absent one is a no-op.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use emerald_table_core::MenuItemId;

use crate::stores::notify::{EventSender, StoreEvent};

/// The session's favorited item ids.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    items: Arc<Mutex<HashSet<MenuItemId>>>,
    events: EventSender,
}

impl FavoritesStore {
    /// Create an empty favorites set wired to the session event channel.
    #[must_use]
    pub fn new(events: EventSender) -> Self {
        Self {
            items: Arc::new(Mutex::new(HashSet::new())),
            events,
        }
    }

    /// Favorite an item. Returns `true` if it was newly added.
    pub fn add(&self, id: MenuItemId) -> bool {
        let added = self.lock().insert(id);
        if added {
            self.events.emit(StoreEvent::FavoritesChanged);
        }
        added
    }

    /// Unfavorite an item. Returns `true` if it was present.
    pub fn remove(&self, id: &MenuItemId) -> bool {
        let removed = self.lock().remove(id);
        if removed {
            self.events.emit(StoreEvent::FavoritesChanged);
        }
        removed
    }

    /// Flip an item's favorite status. Returns `true` if it is now favorited.
    pub fn toggle(&self, id: &MenuItemId) -> bool {
        let now_favorite = {
            let mut items = self.lock();
            if items.remove(id) {
                false
            } else {
                items.insert(id.clone());
                true
            }
        };
        self.events.emit(StoreEvent::FavoritesChanged);
        now_favorite
    }

    /// Whether the item is favorited.
    #[must_use]
    pub fn contains(&self, id: &MenuItemId) -> bool {
        self.lock().contains(id)
    }

    /// Snapshot of favorited ids, sorted for stable display.
    #[must_use]
    pub fn all(&self) -> Vec<MenuItemId> {
        let mut ids: Vec<MenuItemId> = self.lock().iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Number of favorited items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing is favorited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<MenuItemId>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store() -> FavoritesStore {
        FavoritesStore::new(EventSender::new())
    }

    #[test]
    fn test_add_is_idempotent() {
        let favorites = store();
        assert!(favorites.add(MenuItemId::new("a1")));
        assert!(!favorites.add(MenuItemId::new("a1")));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let favorites = store();
        assert!(!favorites.remove(&MenuItemId::new("ghost")));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_toggle_flips_status() {
        let favorites = store();
        assert!(favorites.toggle(&MenuItemId::new("a1")));
        assert!(favorites.contains(&MenuItemId::new("a1")));
        assert!(!favorites.toggle(&MenuItemId::new("a1")));
        assert!(!favorites.contains(&MenuItemId::new("a1")));
    }

    #[test]
    fn test_all_is_sorted() {
        let favorites = store();
        favorites.add(MenuItemId::new("zucchini"));
        favorites.add(MenuItemId::new("arancini"));
        let all = favorites.all();
        let ids: Vec<&str> = all.iter().map(MenuItemId::as_str).collect();
        assert_eq!(ids, vec!["arancini", "zucchini"]);
    }

    #[test]
    fn test_only_real_changes_broadcast() {
        let events = EventSender::new();
        let favorites = FavoritesStore::new(events.clone());
        let mut rx = events.subscribe();

        favorites.add(MenuItemId::new("a1"));
        favorites.add(MenuItemId::new("a1")); // idempotent, no event
        favorites.remove(&MenuItemId::new("ghost")); // no-op, no event

        assert_eq!(rx.try_recv().unwrap(), StoreEvent::FavoritesChanged);
        assert!(rx.try_recv().is_err());
    }
}
