//! Integration tests for Emerald Table.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p emerald-table-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `diner_session` - End-to-end session flows (table, cart, checkout)
//! - `cart_totals` - Cart arithmetic and display rounding
//! - `store_events` - Change notifications across the stores
//!
//! The shared helpers here build sessions against mock collaborators; no
//! network or external services are involved.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use emerald_table_session::config::AppConfig;
use emerald_table_session::menu::{MenuCatalog, MenuItem};
use emerald_table_session::services::auth::AuthBackend;
use emerald_table_session::services::checkout::CheckoutBackend;
use emerald_table_session::services::notices::MemorySink;
use emerald_table_session::state::SessionState;
use emerald_table_session::stores::orders::Order;

use emerald_table_core::{Email, MenuItemId, Price};
use rust_decimal::Decimal;

/// A small fixed menu used across the integration tests.
///
/// Prices are chosen to exercise display rounding: three of "a1" come to
/// 28.50, and "b2" at 4.995 rounds half away from zero.
#[must_use]
pub fn test_menu() -> MenuCatalog {
    let items = vec![
        menu_item("a1", "Paneer Tikka", "9.50"),
        menu_item("b2", "Garlic Naan", "4.995"),
        menu_item("c3", "Mango Lassi", "3.00"),
    ];
    MenuCatalog::new(items).unwrap()
}

/// Build a menu item with the given id, name, and decimal price string.
#[must_use]
pub fn menu_item(id: &str, name: &str, price: &str) -> MenuItem {
    MenuItem {
        id: MenuItemId::new(id),
        name: name.to_owned(),
        description: format!("{name} from the test menu"),
        price: Price::new(price.parse::<Decimal>().unwrap()).unwrap(),
        image: None,
        featured: false,
    }
}

/// A fresh session over the fixed test menu with default configuration.
#[must_use]
pub fn test_session() -> SessionState {
    SessionState::new(AppConfig::default(), test_menu())
}

/// Fetch an item from the session's menu by id, panicking if absent.
#[must_use]
pub fn item(session: &SessionState, id: &str) -> MenuItem {
    session.menu().get(&MenuItemId::new(id)).cloned().unwrap()
}

/// A notice sink that records everything for later assertions.
#[must_use]
pub fn sink() -> Arc<MemorySink> {
    Arc::new(MemorySink::new())
}

/// Auth collaborator that accepts every request.
pub struct AcceptingAuth;

impl AuthBackend for AcceptingAuth {
    async fn signup(&self, _: &str, _: &Email, _: &str) -> Result<(), String> {
        Ok(())
    }

    async fn login(&self, _: &Email, _: &str) -> Result<(), String> {
        Ok(())
    }

    async fn google_login(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Checkout collaborator that accepts every order.
pub struct AcceptingCheckout;

impl CheckoutBackend for AcceptingCheckout {
    async fn submit(&self, _: &Order) -> Result<(), String> {
        Ok(())
    }
}

/// Checkout collaborator that declines every order with a fixed reason.
pub struct DecliningCheckout;

impl CheckoutBackend for DecliningCheckout {
    async fn submit(&self, _: &Order) -> Result<(), String> {
        Err("kitchen is closed".to_owned())
    }
}
