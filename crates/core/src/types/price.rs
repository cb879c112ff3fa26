//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are stored as exact decimals and stay unrounded through every
//! computation. Rounding to currency precision (2 decimal places) happens
//! only at display time via [`Price::display`] or [`format_amount`].

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum PriceError {
    /// Menu prices cannot be negative.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative menu price.
///
/// The amount is kept in the currency's standard unit (e.g., dollars) as an
/// exact decimal. Line and cart totals computed from prices are unrounded;
/// only [`Price::display`] applies currency rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Price {
    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// A zero price.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// The exact, unrounded amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The exact line total for `quantity` units of this price.
    #[must_use]
    pub fn line_total(&self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }

    /// Format for display (e.g., "$19.99"), rounding to 2 decimal places.
    #[must_use]
    pub fn display(&self, currency: CurrencyCode) -> String {
        format_amount(self.0, currency)
    }
}

/// Format an exact decimal amount for display in the given currency.
///
/// Rounds half-away-from-zero to 2 decimal places, matching how totals are
/// presented on bills and cart badges.
#[must_use]
pub fn format_amount(amount: Decimal, currency: CurrencyCode) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{rounded:.2}", currency.symbol())
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// The currency symbol used when formatting prices.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }

    /// The ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }

    /// Parse an ISO 4217 code (case-insensitive).
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "USD" => Some(Self::USD),
            "EUR" => Some(Self::EUR),
            "GBP" => Some(Self::GBP),
            "CAD" => Some(Self::CAD),
            "AUD" => Some(Self::AUD),
            _ => None,
        }
    }
}
