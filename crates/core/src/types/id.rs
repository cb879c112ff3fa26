//! Newtype IDs for type-safe entity references.
//!
//! Menu items and tables are keyed by opaque strings supplied by the menu
//! data provider, so their IDs wrap `String`. Orders are minted locally and
//! use a UUID. Use the `define_str_id!` macro to create string-keyed ID
//! wrappers that prevent accidentally mixing IDs from different entity types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<&str>` and `From<String>` implementations
///
/// # Example
///
/// ```rust
/// # use emerald_table_core::define_str_id;
/// define_str_id!(MenuItemId);
/// define_str_id!(TableId);
///
/// let item_id = MenuItemId::new("a1");
/// let table_id = TableId::new("t-12");
///
/// // These are different types, so this won't compile:
/// // let _: MenuItemId = table_id;
/// ```
#[macro_export]
macro_rules! define_str_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from anything string-like.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.pad(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_str_id!(MenuItemId);
define_str_id!(TableId);

/// Identifier for an order placed during this session.
///
/// Orders are created locally at checkout, so the ID is minted here rather
/// than supplied by an external collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Mint a fresh order ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for OrderId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_str_id_roundtrip() {
        let id = MenuItemId::new("a1");
        assert_eq!(id.as_str(), "a1");
        assert_eq!(id.to_string(), "a1");
        assert_eq!(id.clone().into_inner(), "a1");
    }

    #[test]
    fn test_str_id_equality() {
        assert_eq!(MenuItemId::new("a1"), MenuItemId::from("a1"));
        assert_ne!(MenuItemId::new("a1"), MenuItemId::new("a2"));
    }

    #[test]
    fn test_str_id_serde_transparent() {
        let id = TableId::new("t-12");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"t-12\"");

        let parsed: TableId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_order_id_unique() {
        assert_ne!(OrderId::generate(), OrderId::generate());
    }

    #[test]
    fn test_order_id_display_matches_uuid() {
        let id = OrderId::generate();
        assert_eq!(id.to_string(), id.as_uuid().to_string());
    }
}
