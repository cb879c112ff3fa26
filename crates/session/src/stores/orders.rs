//! Order history for the session.
//!
//! Orders are immutable snapshots created at checkout. The store is
//! append-only: the client never updates or deletes historical orders.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use emerald_table_core::{OrderId, TableId};

use crate::stores::cart::CartLine;
use crate::stores::notify::{EventSender, StoreEvent};

/// An immutable snapshot of the cart taken at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Locally minted order identifier.
    pub id: OrderId,
    /// Table the session was assigned to, if any.
    pub table: Option<TableId>,
    /// The cart lines as they stood at checkout.
    pub lines: Vec<CartLine>,
    /// Exact, unrounded total; rounding is presentation-only.
    pub total: Decimal,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Snapshot the given lines into a new order.
    ///
    /// The total is computed from the lines; the timestamp is taken now.
    #[must_use]
    pub fn new(lines: Vec<CartLine>, table: Option<TableId>) -> Self {
        let total = lines.iter().map(CartLine::line_total).sum();
        Self {
            id: OrderId::generate(),
            table,
            lines,
            total,
            placed_at: Utc::now(),
        }
    }

    /// Total number of units across the order's lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }
}

/// Append-only store of the session's placed orders.
#[derive(Debug, Clone)]
pub struct OrdersStore {
    orders: Arc<Mutex<Vec<Order>>>,
    events: EventSender,
}

impl OrdersStore {
    /// Create an empty history wired to the session event channel.
    #[must_use]
    pub fn new(events: EventSender) -> Self {
        Self {
            orders: Arc::new(Mutex::new(Vec::new())),
            events,
        }
    }

    /// Append an order to the history.
    pub fn record(&self, order: Order) {
        let id = order.id;
        self.lock().push(order);
        self.events.emit(StoreEvent::OrderPlaced(id));
    }

    /// Snapshot of all orders, oldest first.
    #[must_use]
    pub fn all(&self) -> Vec<Order> {
        self.lock().clone()
    }

    /// The most recently placed order, if any.
    #[must_use]
    pub fn latest(&self) -> Option<Order> {
        self.lock().last().cloned()
    }

    /// Number of orders placed this session.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no orders have been placed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Order>> {
        self.orders.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
