//! Session configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; sensible defaults apply.
//!
//! - `EMERALD_RESTAURANT_NAME` - Display name (default: "Emerald Table")
//! - `EMERALD_CURRENCY` - ISO 4217 code for price display (default: USD)
//! - `EMERALD_TABLE_ID` - Table to assign the session to at startup
//! - `EMERALD_MENU_FILE` - Path to a JSON menu file

use std::path::PathBuf;

use thiserror::Error;

use emerald_table_core::{CurrencyCode, TableId};

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Session application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Restaurant display name.
    pub restaurant_name: String,
    /// Currency used when formatting prices.
    pub currency: CurrencyCode,
    /// Table to assign at session start, if known (e.g., from a QR code).
    pub table_id: Option<TableId>,
    /// Menu file to load instead of the built-in sample.
    pub menu_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            restaurant_name: "Emerald Table".to_owned(),
            currency: CurrencyCode::USD,
            table_id: None,
            menu_file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid
    /// (currently: an unknown currency code).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let restaurant_name = get_env_or_default("EMERALD_RESTAURANT_NAME", "Emerald Table");

        let currency = parse_currency(get_optional_env("EMERALD_CURRENCY"))?;

        let table_id = get_optional_env("EMERALD_TABLE_ID").map(TableId::new);
        let menu_file = get_optional_env("EMERALD_MENU_FILE").map(PathBuf::from);

        Ok(Self {
            restaurant_name,
            currency,
            table_id,
            menu_file,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Resolve the display currency from the `EMERALD_CURRENCY` value, if set.
fn parse_currency(value: Option<String>) -> Result<CurrencyCode, ConfigError> {
    match value {
        Some(code) => CurrencyCode::parse(&code).ok_or_else(|| {
            ConfigError::InvalidEnvVar(
                "EMERALD_CURRENCY".to_owned(),
                format!("unknown currency code '{code}'"),
            )
        }),
        None => Ok(CurrencyCode::USD),
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.restaurant_name, "Emerald Table");
        assert_eq!(config.currency, CurrencyCode::USD);
        assert!(config.table_id.is_none());
        assert!(config.menu_file.is_none());
    }

    #[test]
    fn test_get_env_or_default_falls_back() {
        // A variable this test suite never sets
        let value = get_env_or_default("EMERALD_TEST_UNSET_VAR", "fallback");
        assert_eq!(value, "fallback");
    }

    #[test]
    fn test_get_optional_env_absent() {
        assert!(get_optional_env("EMERALD_TEST_UNSET_VAR").is_none());
    }

    #[test]
    fn test_parse_currency_defaults_to_usd() {
        assert_eq!(parse_currency(None).unwrap(), CurrencyCode::USD);
    }

    #[test]
    fn test_parse_currency_accepts_known_codes() {
        assert_eq!(
            parse_currency(Some("gbp".to_owned())).unwrap(),
            CurrencyCode::GBP
        );
    }

    #[test]
    fn test_parse_currency_rejects_unknown_code() {
        let err = parse_currency(Some("XYZ".to_owned())).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("EMERALD_CURRENCY"));
        assert!(message.contains("XYZ"));
    }
}
