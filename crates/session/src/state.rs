//! Session state shared across the application.

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::config::AppConfig;
use crate::images::ImageCatalog;
use crate::menu::{MenuCatalog, MenuItem};
use crate::stores::cart::CartStore;
use crate::stores::favorites::FavoritesStore;
use crate::stores::notify::{EventSender, StoreEvent};
use crate::stores::orders::OrdersStore;
use crate::stores::table::TableStore;

/// Session state shared across all consumers.
///
/// This struct is cheaply cloneable via `Arc` and bundles the configuration,
/// the read-only menu and image catalogs, and the four session stores, all
/// wired to one event channel.
#[derive(Clone)]
pub struct SessionState {
    inner: Arc<SessionStateInner>,
}

struct SessionStateInner {
    config: AppConfig,
    menu: MenuCatalog,
    images: ImageCatalog,
    events: EventSender,
    cart: CartStore,
    orders: OrdersStore,
    favorites: FavoritesStore,
    table: TableStore,
}

impl SessionState {
    /// Create a new session with the default placeholder-image catalog.
    ///
    /// If the configuration names a table, it is assigned immediately.
    #[must_use]
    pub fn new(config: AppConfig, menu: MenuCatalog) -> Self {
        Self::with_images(config, menu, ImageCatalog::default())
    }

    /// Create a new session with an explicit image catalog.
    #[must_use]
    pub fn with_images(config: AppConfig, menu: MenuCatalog, images: ImageCatalog) -> Self {
        let events = EventSender::new();
        let cart = CartStore::new(events.clone());
        let orders = OrdersStore::new(events.clone());
        let favorites = FavoritesStore::new(events.clone());
        let table = TableStore::new(events.clone());

        if let Some(table_id) = &config.table_id {
            // A fresh store cannot already be assigned
            let _ = table.assign(table_id.clone());
        }

        Self {
            inner: Arc::new(SessionStateInner {
                config,
                menu,
                images,
                events,
                cart,
                orders,
                favorites,
                table,
            }),
        }
    }

    /// Get a reference to the session configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get a reference to the menu catalog.
    #[must_use]
    pub fn menu(&self) -> &MenuCatalog {
        &self.inner.menu
    }

    /// Get a reference to the placeholder-image catalog.
    #[must_use]
    pub fn images(&self) -> &ImageCatalog {
        &self.inner.images
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Get a reference to the order history store.
    #[must_use]
    pub fn orders(&self) -> &OrdersStore {
        &self.inner.orders
    }

    /// Get a reference to the favorites store.
    #[must_use]
    pub fn favorites(&self) -> &FavoritesStore {
        &self.inner.favorites
    }

    /// Get a reference to the table store.
    #[must_use]
    pub fn table(&self) -> &TableStore {
        &self.inner.table
    }

    /// Subscribe to store change events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.inner.events.subscribe()
    }

    /// The image to display for a menu item (explicit or placeholder).
    #[must_use]
    pub fn image_for<'a>(&'a self, item: &'a MenuItem) -> &'a str {
        self.inner.images.for_item(item)
    }

    /// Format an amount in the session's currency, rounded for display.
    #[must_use]
    pub fn format_amount(&self, amount: rust_decimal::Decimal) -> String {
        emerald_table_core::format_amount(amount, self.inner.config.currency)
    }
}
