//! Session-scoped stores.
//!
//! Each store is a cheaply cloneable handle over shared state, mutated
//! synchronously in response to user-interface events. Every mutation
//! broadcasts a [`StoreEvent`] so the view layer can keep totals and badges
//! consistent without polling.

pub mod cart;
pub mod favorites;
pub mod notify;
pub mod orders;
pub mod table;

pub use cart::{CartError, CartLine, CartStore};
pub use favorites::FavoritesStore;
pub use notify::{EventSender, StoreEvent};
pub use orders::{Order, OrdersStore};
pub use table::{TableError, TableStore};
