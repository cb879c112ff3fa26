//! Emerald Table Core - Shared types library.
//!
//! This crate provides common types used across all Emerald Table components:
//! - `session` - The session-scoped ordering core (cart, orders, favorites)
//! - `cli` - Command-line tools for inspecting and demoing a session
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no async runtime, no stores.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
