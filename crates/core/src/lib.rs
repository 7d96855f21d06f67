//! Hardware Store Core - Shared types library.
//!
//! This crate provides common types used across all hardware store components:
//! - `storefront` - Public-facing store site
//! - `integration-tests` - Black-box tests against the storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no async.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails
//! - [`cart`] - The cart, order snapshot, and checkout status state machine

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{Cart, CartLine, CheckoutStatus, Order};
pub use types::*;
