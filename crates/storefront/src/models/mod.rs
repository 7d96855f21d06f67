//! View-state models owned by the storefront.

pub mod session;

pub use session::{Shopper, session_keys};
