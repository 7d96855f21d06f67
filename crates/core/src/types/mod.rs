//! Core types for the hardware store.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod item;
pub mod price;

pub use email::{Email, EmailError};
pub use id::{ItemId, SessionId, TransactionId};
pub use item::CatalogItem;
pub use price::Price;
