//! Deterministic placeholder-image assignment.
//!
//! Menu items without an explicit image get one picked from a fixed, ordered
//! catalog. Selection is a pure content-derived hash of the item identifier,
//! never randomness: the same identifier always maps to the same image within
//! a running configuration. Collisions across identifiers are expected and
//! fine; many items may share a placeholder.

use crate::menu::MenuItem;

/// The production placeholder list: eight stock food photos.
const STOCK_FOOD_IMAGES: [&str; 8] = [
    "https://images.unsplash.com/photo-1565299624946-b28f40a0ae38", // Pizza
    "https://images.unsplash.com/photo-1568901346375-23c9450c58cd", // Burger
    "https://images.unsplash.com/photo-1562967914-608f82629710",    // Chicken
    "https://images.unsplash.com/photo-1630384060421-cb20d0e0649d", // Fries
    "https://images.unsplash.com/photo-1546833999-b9f581a1996d",    // Dal
    "https://images.unsplash.com/photo-1621996346565-e3dbc646d9a9", // Pasta
    "https://images.unsplash.com/photo-1551024506-0bccd828d307",    // Dessert
    "https://images.unsplash.com/photo-1551024709-8f23befc6f87",    // Drink
];

/// Errors that can occur when building an [`ImageCatalog`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum ImageCatalogError {
    /// The catalog must hold at least one image reference.
    #[error("image catalog cannot be empty")]
    Empty,
}

/// A fixed, ordered list of image references with deterministic assignment.
#[derive(Debug, Clone)]
pub struct ImageCatalog {
    refs: Vec<String>,
}

impl ImageCatalog {
    /// Build a catalog from an ordered list of image references.
    ///
    /// # Errors
    ///
    /// Returns [`ImageCatalogError::Empty`] if the list is empty.
    pub fn new(refs: Vec<String>) -> Result<Self, ImageCatalogError> {
        if refs.is_empty() {
            return Err(ImageCatalogError::Empty);
        }
        Ok(Self { refs })
    }

    /// Assign an image to an identifier.
    ///
    /// Sums the UTF-16 code units of the identifier (wrapping) and indexes
    /// the catalog with the sum modulo its length. An empty identifier sums
    /// to 0 and resolves to the first image; that is defined behavior, not
    /// an error.
    #[must_use]
    pub fn assign(&self, id: &str) -> &str {
        let sum = id
            .encode_utf16()
            .fold(0u32, |acc, unit| acc.wrapping_add(u32::from(unit)));
        let index = (sum as usize) % self.refs.len();
        // index < len by construction; the constructor rejects empty catalogs
        self.refs.get(index).map_or("", String::as_str)
    }

    /// The image to display for a menu item.
    ///
    /// Prefers the item's explicit image; falls back to deterministic
    /// assignment by item id.
    #[must_use]
    pub fn for_item<'a>(&'a self, item: &'a MenuItem) -> &'a str {
        item.image
            .as_deref()
            .unwrap_or_else(|| self.assign(item.id.as_str()))
    }

    /// The ordered image references.
    #[must_use]
    pub fn refs(&self) -> &[String] {
        &self.refs
    }

    /// Number of images in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// Always false; the constructor rejects empty catalogs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}

impl Default for ImageCatalog {
    fn default() -> Self {
        Self {
            refs: STOCK_FOOD_IMAGES.iter().map(|&s| s.to_owned()).collect(),
        }
    }
}
