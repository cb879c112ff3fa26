//! Read-only menu catalog.
//!
//! Menu data is owned by an external provider; this core only consumes it.
//! [`MenuCatalog`] holds the loaded items immutably and offers lookups for
//! the view layer and the cart.

use std::path::Path;

use serde::{Deserialize, Serialize};

use emerald_table_core::{MenuItemId, Price};

/// Errors that can occur when loading a menu.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// Reading the menu file failed.
    #[error("failed to read menu file: {0}")]
    Io(#[from] std::io::Error),

    /// The menu JSON is malformed.
    #[error("failed to parse menu: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two items share the same identifier.
    #[error("duplicate menu item id: {0}")]
    DuplicateId(MenuItemId),
}

/// A purchasable catalog entry.
///
/// Immutable once loaded. Cart lines and order snapshots clone items rather
/// than mutating them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier, supplied by the menu data provider.
    pub id: MenuItemId,
    /// Display name.
    pub name: String,
    /// Short description shown on cards and detail views.
    pub description: String,
    /// Non-negative price.
    pub price: Price,
    /// Explicit image reference; items without one get a deterministic
    /// placeholder from the image catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Highlighted on the menu page.
    #[serde(default)]
    pub featured: bool,
}

/// The loaded menu: an ordered, read-only list of [`MenuItem`]s.
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Build a catalog from already-loaded items.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::DuplicateId`] if two items share an identifier.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, MenuError> {
        let mut seen = std::collections::HashSet::new();
        for item in &items {
            if !seen.insert(item.id.clone()) {
                return Err(MenuError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Parse a catalog from a JSON array of items.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or contains duplicate ids.
    pub fn from_json_str(json: &str) -> Result<Self, MenuError> {
        let items: Vec<MenuItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Load a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the JSON is malformed,
    /// or the menu contains duplicate ids.
    pub fn from_json_file(path: &Path) -> Result<Self, MenuError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// All items in menu order.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: &MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Items flagged as featured, in menu order.
    pub fn featured(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(|item| item.featured)
    }

    /// Number of items on the menu.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the menu is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A small fixture menu used by the demo command and tests.
    #[must_use]
    pub fn sample() -> Self {
        let items = vec![
            MenuItem {
                id: MenuItemId::new("margherita"),
                name: "Margherita Pizza".to_owned(),
                description: "San Marzano tomatoes, fresh mozzarella, basil".to_owned(),
                price: Price::from_cents(1250),
                image: None,
                featured: true,
            },
            MenuItem {
                id: MenuItemId::new("smash-burger"),
                name: "Smash Burger".to_owned(),
                description: "Double patty, cheddar, pickles, house sauce".to_owned(),
                price: Price::from_cents(1100),
                image: None,
                featured: false,
            },
            MenuItem {
                id: MenuItemId::new("dal-tadka"),
                name: "Dal Tadka".to_owned(),
                description: "Yellow lentils tempered with cumin and garlic".to_owned(),
                price: Price::from_cents(950),
                image: Some("/uploads/dal-tadka.png".to_owned()),
                featured: false,
            },
            MenuItem {
                id: MenuItemId::new("tiramisu"),
                name: "Tiramisu".to_owned(),
                description: "Espresso-soaked ladyfingers, mascarpone cream".to_owned(),
                price: Price::from_cents(700),
                image: None,
                featured: true,
            },
            MenuItem {
                id: MenuItemId::new("mint-lemonade"),
                name: "Mint Lemonade".to_owned(),
                description: "Fresh-squeezed, lightly sweetened".to_owned(),
                price: Price::from_cents(450),
                image: None,
                featured: false,
            },
        ];
        // The fixture ids are distinct by construction.
        Self { items }
    }
}
