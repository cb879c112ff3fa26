//! Unified error handling.
//!
//! Every error in this core is recoverable at the UI-interaction level;
//! nothing is fatal to the process. `AppError` unifies the per-concern
//! errors and maps each to a message safe to show the diner.

use thiserror::Error;

use crate::config::ConfigError;
use crate::images::ImageCatalogError;
use crate::menu::MenuError;
use crate::services::auth::AuthError;
use crate::services::checkout::CheckoutError;
use crate::stores::cart::CartError;
use crate::stores::table::TableError;

/// Application-level error type for the session core.
#[derive(Debug, Error)]
pub enum AppError {
    /// Cart validation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Table assignment failed.
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Checkout operation failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Menu could not be loaded.
    #[error("Menu error: {0}")]
    Menu(#[from] MenuError),

    /// Configuration is invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Image catalog is invalid.
    #[error("Image catalog error: {0}")]
    Images(#[from] ImageCatalogError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// A message safe to show the diner.
    ///
    /// Validation and collaborator-rejection messages pass through; loading
    /// and configuration problems are internal and get a generic message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Cart(err) => err.to_string(),
            Self::Table(_) => "This session already has a table".to_owned(),
            Self::Auth(err) => err.to_string(),
            Self::Checkout(err) => err.to_string(),
            Self::Menu(_) => "The menu is currently unavailable".to_owned(),
            Self::Config(_) | Self::Images(_) => "Something went wrong starting up".to_owned(),
            Self::NotFound(what) => format!("{what} was not found"),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
