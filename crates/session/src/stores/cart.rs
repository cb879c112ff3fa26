//! The active order-in-progress.
//!
//! The cart holds at most one line per menu item: adding an item that is
//! already present increases its quantity instead of duplicating the line.
//! Totals are exact decimals; currency rounding happens only at display.

use std::sync::{Arc, Mutex, PoisonError};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use emerald_table_core::MenuItemId;

use crate::menu::MenuItem;
use crate::stores::notify::{EventSender, StoreEvent};

/// Errors that can occur when mutating the cart.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CartError {
    /// `add_item` requires a positive quantity.
    #[error("quantity must be at least 1")]
    ZeroQuantity,
}

/// One menu item plus quantity within the cart.
///
/// The line snapshots the item at add time; menu data itself is never
/// mutated through the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The item this line refers to.
    pub item: MenuItem,
    /// Positive quantity.
    pub quantity: u32,
}

impl CartLine {
    /// The exact, unrounded total for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.item.price.line_total(self.quantity)
    }
}

/// The session's cart: a cheaply cloneable handle over shared lines.
#[derive(Debug, Clone)]
pub struct CartStore {
    lines: Arc<Mutex<Vec<CartLine>>>,
    events: EventSender,
}

impl CartStore {
    /// Create an empty cart wired to the session event channel.
    #[must_use]
    pub fn new(events: EventSender) -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
            events,
        }
    }

    /// Add `quantity` units of `item`.
    ///
    /// If a line for the item already exists its quantity is increased;
    /// otherwise a new line is appended.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ZeroQuantity`] if `quantity` is 0; the cart is
    /// left unchanged.
    pub fn add_item(&self, item: MenuItem, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        {
            let mut lines = self.lock();
            if let Some(line) = lines.iter_mut().find(|line| line.item.id == item.id) {
                line.quantity = line.quantity.saturating_add(quantity);
            } else {
                lines.push(CartLine { item, quantity });
            }
        }

        self.events.emit(StoreEvent::CartChanged);
        Ok(())
    }

    /// Remove the line for `id`, if present. Removing an absent line is a
    /// no-op, not an error, and broadcasts nothing.
    pub fn remove_item(&self, id: &MenuItemId) {
        let removed = {
            let mut lines = self.lock();
            let before = lines.len();
            lines.retain(|line| &line.item.id != id);
            lines.len() != before
        };

        if removed {
            self.events.emit(StoreEvent::CartChanged);
        }
    }

    /// Set the quantity of the line for `id` directly.
    ///
    /// A quantity of 0 removes the line. Updating an absent line is a no-op;
    /// lines are only created through [`CartStore::add_item`]. Only updates
    /// that change a line broadcast [`StoreEvent::CartChanged`]; setting the
    /// current quantity again is a no-op.
    pub fn update_quantity(&self, id: &MenuItemId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(id);
            return;
        }

        let changed = {
            let mut lines = self.lock();
            match lines.iter_mut().find(|line| &line.item.id == id) {
                Some(line) if line.quantity != quantity => {
                    line.quantity = quantity;
                    true
                }
                _ => false,
            }
        };

        if changed {
            self.events.emit(StoreEvent::CartChanged);
        }
    }

    /// Empty the cart. Clearing an already-empty cart broadcasts nothing.
    pub fn clear(&self) {
        let had_lines = {
            let mut lines = self.lock();
            let had = !lines.is_empty();
            lines.clear();
            had
        };

        if had_lines {
            self.events.emit(StoreEvent::CartChanged);
        }
    }

    /// The exact, unrounded cart total: `sum(price * quantity)`.
    ///
    /// Rounding to currency precision happens at presentation time only
    /// (see `Price::display` / `format_amount` in the core crate).
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lock().iter().map(CartLine::line_total).sum()
    }

    /// Snapshot of the current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        self.lock().clone()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lock().len()
    }

    /// Total number of units across all lines (the badge count).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lock()
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<CartLine>> {
        // A poisoned lock only means another thread panicked mid-mutation;
        // the line vector is still structurally valid.
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
