//! Emerald Table Session - the session-scoped ordering core.
//!
//! This crate holds everything stateful about one diner session: the cart,
//! the order history, favorites, and the table identity, together with the
//! deterministic placeholder-image assignment and the services that talk to
//! external collaborators (auth, checkout).
//!
//! The view layer is an external consumer: it renders what the stores hold
//! and routes user intents into the operations defined here. Store mutations
//! are synchronous and non-blocking; interested consumers subscribe to a
//! broadcast of [`stores::StoreEvent`]s to keep totals and badges consistent.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration
//! - [`error`] - Unified error type with user-facing messages
//! - [`images`] - Deterministic placeholder-image assignment
//! - [`menu`] - Read-only menu catalog
//! - [`services`] - Auth and checkout collaborators, user notices
//! - [`state`] - Shared session state bundle
//! - [`stores`] - Cart, orders, favorites, and table stores

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod images;
pub mod menu;
pub mod services;
pub mod state;
pub mod stores;
